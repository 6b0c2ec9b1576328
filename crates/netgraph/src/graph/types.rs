//! Core graph types: nodes, edges, IDs, and adjacency flavors.

use super::property::PropertyMap;
use crate::feature::Coordinate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node (monotonic counter).
pub type NodeId = u64;

/// Unique identifier for an edge (monotonic counter).
pub type EdgeId = u64;

/// Whether a graph distinguishes edge direction.
///
/// Selected once at builder construction. A directed graph tracks incoming
/// and outgoing edges separately per node; an undirected graph keeps a
/// single adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Edges are unordered pairs; adjacency is symmetric
    Undirected,
    /// Edges run tail to head; in/out adjacency tracked separately
    Directed,
}

/// Per-node adjacency storage, one flavor per [`Orientation`].
///
/// Edge ids are kept in insertion order (a `Vec`, not a set) so traversal and
/// serialization are deterministic for identical input order, and parallel
/// edges between the same node pair are preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Adjacency {
    /// All incident edges, in insertion order
    Undirected(Vec<EdgeId>),
    /// Incoming and outgoing edges tracked separately
    Directed {
        /// Edges whose head is this node
        incoming: Vec<EdgeId>,
        /// Edges whose tail is this node
        outgoing: Vec<EdgeId>,
    },
}

impl Adjacency {
    /// Empty adjacency of the given flavor.
    pub fn empty(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Undirected => Adjacency::Undirected(Vec::new()),
            Orientation::Directed => Adjacency::Directed {
                incoming: Vec::new(),
                outgoing: Vec::new(),
            },
        }
    }

    /// Edges leaving this node: the outgoing list for directed graphs, all
    /// incident edges for undirected graphs.
    pub fn out_edges(&self) -> &[EdgeId] {
        match self {
            Adjacency::Undirected(edges) => edges,
            Adjacency::Directed { outgoing, .. } => outgoing,
        }
    }

    /// Edges arriving at this node: the incoming list for directed graphs,
    /// all incident edges for undirected graphs.
    pub fn in_edges(&self) -> &[EdgeId] {
        match self {
            Adjacency::Undirected(edges) => edges,
            Adjacency::Directed { incoming, .. } => incoming,
        }
    }

    /// Every incident edge, in insertion order (out then in for directed).
    pub fn incident_edges(&self) -> Vec<EdgeId> {
        match self {
            Adjacency::Undirected(edges) => edges.clone(),
            Adjacency::Directed { incoming, outgoing } => {
                let mut all = outgoing.clone();
                all.extend_from_slice(incoming);
                all
            }
        }
    }

    /// Total number of incident edge entries (a self-loop counts twice).
    pub fn degree(&self) -> usize {
        match self {
            Adjacency::Undirected(edges) => edges.len(),
            Adjacency::Directed { incoming, outgoing } => incoming.len() + outgoing.len(),
        }
    }

    pub(crate) fn record_out(&mut self, edge: EdgeId) {
        match self {
            Adjacency::Undirected(edges) => edges.push(edge),
            Adjacency::Directed { outgoing, .. } => outgoing.push(edge),
        }
    }

    pub(crate) fn record_in(&mut self, edge: EdgeId) {
        match self {
            Adjacency::Undirected(edges) => edges.push(edge),
            Adjacency::Directed { incoming, .. } => incoming.push(edge),
        }
    }

    pub(crate) fn forget(&mut self, edge: EdgeId) {
        match self {
            Adjacency::Undirected(edges) => edges.retain(|e| *e != edge),
            Adjacency::Directed { incoming, outgoing } => {
                incoming.retain(|e| *e != edge);
                outgoing.retain(|e| *e != edge);
            }
        }
    }
}

/// A node in the network graph.
///
/// Nodes correspond to merged feature endpoint coordinates (junctions,
/// dead ends). Invariant: the adjacency list holds only edges for which this
/// node is an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (assigned by the builder)
    pub id: NodeId,
    /// The merged endpoint coordinate this node stands for
    pub coordinate: Coordinate,
    /// Flexible key-value metadata
    pub properties: PropertyMap,
    /// Incident edge lists (flavor matches the graph orientation)
    pub adjacency: Adjacency,
}

impl Node {
    /// Create a new node with empty adjacency of the given flavor.
    pub fn new(
        id: NodeId,
        coordinate: Coordinate,
        properties: PropertyMap,
        orientation: Orientation,
    ) -> Self {
        Self {
            id,
            coordinate,
            properties,
            adjacency: Adjacency::empty(orientation),
        }
    }

    /// Total degree (a self-loop counts twice).
    pub fn degree(&self) -> usize {
        self.adjacency.degree()
    }
}

/// An edge in the network graph.
///
/// Edges correspond to single line segments of a feature. `source` is the
/// tail (node A) and `target` the head (node B); for undirected graphs the
/// distinction only records construction order. Parallel edges between the
/// same node pair are permitted and never collapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier (assigned by the builder)
    pub id: EdgeId,
    /// Tail node (first endpoint of the segment)
    pub source: NodeId,
    /// Head node (second endpoint of the segment)
    pub target: NodeId,
    /// Flexible key-value metadata (feature back-reference, attributes)
    pub properties: PropertyMap,
    /// Optional precomputed cost for shortest-path use
    pub weight: Option<f64>,
}

impl Edge {
    /// Create a new edge.
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        properties: PropertyMap,
        weight: Option<f64>,
    ) -> Self {
        Self {
            id,
            source,
            target,
            properties,
            weight,
        }
    }

    /// The endpoint on the far side of `node`.
    ///
    /// For a self-loop both endpoints coincide, so the answer is `node`
    /// itself. Callers must pass one of the two endpoints.
    pub fn opposite(&self, node: NodeId) -> NodeId {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    /// Whether both endpoints are the same node (degenerate geometry).
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_flavors() {
        let mut und = Adjacency::empty(Orientation::Undirected);
        und.record_out(1);
        und.record_in(2);
        assert_eq!(und.out_edges(), &[1, 2]);
        assert_eq!(und.in_edges(), &[1, 2]);
        assert_eq!(und.degree(), 2);

        let mut dir = Adjacency::empty(Orientation::Directed);
        dir.record_out(1);
        dir.record_in(2);
        assert_eq!(dir.out_edges(), &[1]);
        assert_eq!(dir.in_edges(), &[2]);
        assert_eq!(dir.degree(), 2);
    }

    #[test]
    fn test_adjacency_forget() {
        let mut adj = Adjacency::empty(Orientation::Directed);
        adj.record_out(1);
        adj.record_out(2);
        adj.record_in(1);
        adj.forget(1);
        assert_eq!(adj.out_edges(), &[2]);
        assert!(adj.in_edges().is_empty());
    }

    #[test]
    fn test_edge_opposite() {
        let edge = Edge::new(0, 3, 7, PropertyMap::new(), None);
        assert_eq!(edge.opposite(3), 7);
        assert_eq!(edge.opposite(7), 3);

        let looped = Edge::new(1, 5, 5, PropertyMap::new(), None);
        assert!(looped.is_loop());
        assert_eq!(looped.opposite(5), 5);
    }
}
