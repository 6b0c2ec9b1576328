//! The owning graph container.

use super::types::{Adjacency, Edge, EdgeId, Node, NodeId, Orientation};
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The owning container of all nodes and edges for one analysis run.
///
/// A `Graph` is produced by a [`GraphBuilder`](crate::build::GraphBuilder)
/// and is the sole owner of every [`Node`] and [`Edge`]; traversals hold a
/// shared borrow plus their own auxiliary state. Construction and traversal
/// are single-threaded and synchronous: mutating the graph while a traversal
/// is live is a precondition violation, which the borrow rules make
/// unrepresentable in safe code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    orientation: Orientation,
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
}

impl Graph {
    /// Create an empty graph of the given orientation.
    pub(crate) fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// The orientation this graph was built with.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get a node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist
    /// (including nodes detached by the builder).
    pub fn get_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(&id)
            .ok_or(GraphError::NodeNotFound { node_id: id })
    }

    /// Get an edge by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn get_edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges
            .get(&id)
            .ok_or(GraphError::EdgeNotFound { edge_id: id })
    }

    /// Whether a node with this id is present.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over all nodes (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over all edges (arbitrary order).
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// All node ids, sorted ascending (deterministic).
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<_> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All edge ids, sorted ascending (deterministic).
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut ids: Vec<_> = self.edges.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Edges leaving a node: the out-list for directed graphs, all incident
    /// edges for undirected graphs. Insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn out_edges(&self, id: NodeId) -> Result<&[EdgeId]> {
        Ok(self.get_node(id)?.adjacency.out_edges())
    }

    /// Edges arriving at a node: the in-list for directed graphs, all
    /// incident edges for undirected graphs. Insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn in_edges(&self, id: NodeId) -> Result<&[EdgeId]> {
        Ok(self.get_node(id)?.adjacency.in_edges())
    }

    /// Nodes reachable from `id` over one edge in traversal direction
    /// (out-edges for directed, all adjacency for undirected), in adjacency
    /// order. Parallel edges yield the same neighbor more than once; visited
    /// bookkeeping in the traversals deduplicates.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn out_related(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let node = self.get_node(id)?;
        let mut related = Vec::new();
        for edge_id in node.adjacency.out_edges() {
            // Edge ids in adjacency always resolve unless the caller removed
            // a node without detaching its edges first.
            if let Some(edge) = self.edges.get(edge_id) {
                related.push(edge.opposite(id));
            }
        }
        Ok(related)
    }

    /// In-degree: incoming edge count for directed graphs, total incident
    /// edge count for undirected graphs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn in_degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.get_node(id)?.adjacency.in_edges().len())
    }

    /// Out-degree: outgoing edge count for directed graphs, total incident
    /// edge count for undirected graphs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn out_degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.get_node(id)?.adjacency.out_edges().len())
    }

    /// Total degree (a self-loop counts twice).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.get_node(id)?.degree())
    }

    /// All edges from `source` to `target`, in id order.
    ///
    /// For undirected graphs, edges are matched in either endpoint order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node doesn't exist.
    pub fn edges_between(&self, source: NodeId, target: NodeId) -> Result<Vec<EdgeId>> {
        let node = self.get_node(source)?;
        self.get_node(target)?;

        let mut found: Vec<EdgeId> = node
            .adjacency
            .out_edges()
            .iter()
            .copied()
            .filter(|edge_id| {
                self.edges
                    .get(edge_id)
                    .is_some_and(|edge| edge.opposite(source) == target)
            })
            .collect();
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }

    // Mutation is reserved for the builder; the graph itself is
    // immutable-shape once built.

    pub(crate) fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        let id = edge.id;
        let (source, target) = (edge.source, edge.target);
        self.edges.insert(id, edge);

        self.node_adjacency_mut(source)?.record_out(id);
        self.node_adjacency_mut(target)?.record_in(id);
        Ok(())
    }

    pub(crate) fn detach_node(&mut self, id: NodeId) -> Result<Node> {
        self.nodes
            .remove(&id)
            .ok_or(GraphError::NodeNotFound { node_id: id })
    }

    pub(crate) fn detach_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .remove(&id)
            .ok_or(GraphError::EdgeNotFound { edge_id: id })?;

        // Endpoints may already be gone if the caller detached a node first.
        if let Some(node) = self.nodes.get_mut(&edge.source) {
            node.adjacency.forget(id);
        }
        if let Some(node) = self.nodes.get_mut(&edge.target) {
            node.adjacency.forget(id);
        }
        Ok(edge)
    }

    fn node_adjacency_mut(&mut self, id: NodeId) -> Result<&mut Adjacency> {
        self.nodes
            .get_mut(&id)
            .map(|node| &mut node.adjacency)
            .ok_or(GraphError::NodeNotFound { node_id: id })
    }
}
