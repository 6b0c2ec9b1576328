//! Traversal strategies and the walker/visitor driver.
//!
//! A [`Traversal`] produces components lazily in a strategy-defined order;
//! [`GraphWalker`] drives one against a [`GraphVisitor`], whose [`Control`]
//! verdict decides whether to continue, stop, or prune the current branch.
//! Per-traversal state (visited sets, frontiers, priority queues) lives in
//! the iterator and is discarded with it; the graph itself is never mutated.

mod dijkstra;
mod frontier;
mod topological;
mod walker;

pub use dijkstra::{DijkstraIterator, EdgeWeighter, StoredWeight};
pub use frontier::{Fifo, Frontier, Lifo};
pub use topological::{BreadthFirstIterator, DepthFirstIterator, TopologicalIterator};
pub use walker::{Control, GraphVisitor, GraphWalker, Walk};

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Lifecycle of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// No component yielded yet; seeding happens on the first advance
    NotStarted,
    /// At least one advance happened, more components may remain
    Iterating,
    /// Completion was reported; further advances are an error
    Exhausted,
}

/// A lazy, order-defining producer of graph components.
///
/// The state machine is NOT_STARTED → ITERATING → EXHAUSTED: `advance`
/// yields `Ok(Some(node))` while components remain, reports completion with
/// `Ok(None)` exactly once, and any later call returns
/// [`GraphError::Exhausted`](crate::GraphError::Exhausted).
///
/// Yielding and expansion are split so the driver can prune: `advance`
/// returns the next component without scheduling its successors, and
/// `expand` pushes them afterwards. A walker that skips `expand` skips the
/// component's descendants.
pub trait Traversal {
    /// Yield the next component in traversal order.
    fn advance(&mut self, graph: &Graph) -> Result<Option<NodeId>>;

    /// Schedule the successors of a yielded component.
    fn expand(&mut self, graph: &Graph, node: NodeId) -> Result<()>;
}
