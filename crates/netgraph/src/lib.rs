//! # netgraph
//!
//! A graph model and traversal toolkit for linear feature networks (roads,
//! rails, rivers, utility lines).
//!
//! ## Core Principles
//!
//! - **Format Agnostic**: bring your own feature reader, we build the graph
//! - **Deterministic**: identical input order yields an identical graph
//! - **Explicit Ownership**: the graph owns every node and edge; traversals
//!   borrow
//! - **Zero Magic**: no hidden snapping, no background work
//!
//! ## Architecture
//!
//! ```text
//! Validation / network analysis callers
//!     ↓
//! Analysis helpers (orphans, reachability, routes)
//!     ↓
//! Walker + Visitor (continue / stop / prune)
//!     ↓
//! Traversals (breadth-first, depth-first, Dijkstra)
//!     ↓
//! Graph (nodes, edges, adjacency)
//!     ↑
//! Builder + BuildPolicy (feature stream → merged endpoints)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use netgraph::{
//!     Control, Coordinate, GraphBuilder, GraphWalker, LineFeature, Orientation,
//!     BreadthFirstIterator, PropertyMap,
//! };
//!
//! # fn main() -> netgraph::Result<()> {
//! let mut builder = GraphBuilder::new(Orientation::Directed);
//! builder.add(&LineFeature::new(
//!     vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)],
//!     PropertyMap::new().with("name", "High Street"),
//! ))?;
//! let graph = builder.build();
//!
//! let mut traversal = BreadthFirstIterator::new();
//! let mut count = 0;
//! GraphWalker::walk(&graph, &mut traversal, &mut |_: &netgraph::Graph,
//!                                                 _: &netgraph::Node| {
//!     count += 1;
//!     Control::Continue
//! })?;
//! assert_eq!(count, 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod build;
pub mod error;
pub mod export;
pub mod feature;
pub mod graph;
pub mod traverse;

// Re-export main types
pub use build::{BuildPolicy, GraphBuilder, LinePolicy, NetworkPolicy};
pub use error::{GraphError, Result};
pub use feature::{Coordinate, FeatureId, LineFeature};
pub use graph::{Adjacency, Edge, EdgeId, Graph, Node, NodeId, Orientation, PropertyMap, PropertyValue};
pub use traverse::{
    BreadthFirstIterator, Control, DepthFirstIterator, DijkstraIterator, EdgeWeighter, Fifo,
    Frontier, GraphVisitor, GraphWalker, Lifo, StoredWeight, TopologicalIterator, Traversal,
    TraversalState, Walk,
};
