//! Core graph types and the owning container.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: merged feature endpoints (junctions, dead ends)
//! - [`Edge`]: single line segments connecting two nodes
//! - [`Graph`]: the owning container produced by a builder

mod container;
mod property;
mod types;

pub use container::Graph;
pub use property::{PropertyMap, PropertyValue};
pub use types::{Adjacency, Edge, EdgeId, Node, NodeId, Orientation};
