//! Export module for visualizing graphs in external tools.
//!
//! Supported formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools

pub mod dot;
pub mod json;

pub use dot::export_dot;
pub use json::export_json;
