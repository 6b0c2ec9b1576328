//! Convenience wrappers for common network analysis questions.
//!
//! Thin compositions of the traversal machinery, reducing boilerplate for
//! validation routines: orphan detection, reachability, shortest routes.

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::traverse::{
    BreadthFirstIterator, Control, DijkstraIterator, EdgeWeighter, GraphWalker, Traversal,
};

/// Nodes with no incident edges at all, sorted by id.
///
/// In a road network these are junction points no segment connects to,
/// which usually indicates removed or inconsistent source features.
pub fn orphan_nodes(graph: &Graph) -> Vec<NodeId> {
    graph
        .node_ids()
        .into_iter()
        .filter(|id| graph.get_node(*id).map(|n| n.degree() == 0).unwrap_or(false))
        .collect()
}

/// All nodes reachable from `start` (inclusive), in breadth-first order.
///
/// Follows out-edges in directed graphs, all adjacency in undirected ones.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` doesn't exist.
pub fn reachable_from(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    let mut traversal = BreadthFirstIterator::from_seeds(vec![start]);
    let mut reached = Vec::new();
    let mut collector = |_: &Graph, node: &crate::graph::Node| {
        reached.push(node.id);
        Control::Continue
    };
    GraphWalker::walk(graph, &mut traversal, &mut collector)?;
    Ok(reached)
}

/// Cheapest accumulated cost from `from` to `to`, or `None` when `to` is
/// unreachable.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `from` doesn't exist,
/// [`GraphError::NegativeWeight`](crate::GraphError::NegativeWeight) if the
/// weighter produces a negative cost.
pub fn shortest_distance<W: EdgeWeighter>(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    weighter: W,
) -> Result<Option<f64>> {
    let mut traversal = DijkstraIterator::new(from, weighter);
    while let Some(node) = traversal.advance(graph)? {
        if node == to {
            break;
        }
    }
    Ok(traversal.distance(to))
}

/// Cheapest path from `from` to `to` (inclusive of both endpoints), or
/// `None` when `to` is unreachable.
///
/// # Errors
///
/// Same failure modes as [`shortest_distance`].
pub fn shortest_path<W: EdgeWeighter>(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    weighter: W,
) -> Result<Option<Vec<NodeId>>> {
    let mut traversal = DijkstraIterator::new(from, weighter);
    while let Some(node) = traversal.advance(graph)? {
        if node == to {
            break;
        }
    }
    Ok(traversal.path_to(to))
}
