//! Graph construction from linear features.
//!
//! [`GraphBuilder`] runs the construction algorithm; a [`BuildPolicy`]
//! decides what payload (and optional weight) each node and edge carries.

mod builder;
mod policy;

pub use builder::GraphBuilder;
pub use policy::{BuildPolicy, LinePolicy, NetworkPolicy};
