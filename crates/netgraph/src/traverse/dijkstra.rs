//! Dijkstra shortest-path traversal.

use super::{Traversal, TraversalState};
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, NodeId};
use log::trace;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Strategy assigning a non-negative cost to an edge.
///
/// Any `Fn(&Edge) -> f64` closure is a weighter; [`StoredWeight`] reads the
/// weight the builder attached to the edge.
pub trait EdgeWeighter {
    /// The cost of traversing `edge`. Must be non-negative; a negative
    /// result fails the traversal with [`GraphError::NegativeWeight`].
    fn weight(&self, edge: &Edge) -> f64;
}

impl<F: Fn(&Edge) -> f64> EdgeWeighter for F {
    fn weight(&self, edge: &Edge) -> f64 {
        self(edge)
    }
}

/// Weighter reading [`Edge::weight`], defaulting to 0 when unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredWeight;

impl EdgeWeighter for StoredWeight {
    fn weight(&self, edge: &Edge) -> f64 {
        edge.weight.unwrap_or(0.0)
    }
}

// Min-ordered heap entry. Ties on cost break by discovery sequence, so
// equal-distance settles follow discovery order deterministically.
struct HeapEntry {
    cost: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.to_bits() == other.cost.to_bits() && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap pops the greatest, we want the cheapest.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Traversal yielding components in order of accumulated path cost from a
/// source node.
///
/// Each [`advance`](Traversal::advance) settles the next-closest unsettled
/// node and relaxes its related edges (out-edges for directed graphs, all
/// adjacency for undirected graphs) through the injected [`EdgeWeighter`].
/// Because relaxation happens during `advance`,
/// [`expand`](Traversal::expand) is a no-op and branch pruning has no
/// effect on this traversal.
///
/// Nodes never settled are unreachable from the source: [`distance`] and
/// [`path_to`] return `None` for them rather than an infinity sentinel.
///
/// [`distance`]: DijkstraIterator::distance
/// [`path_to`]: DijkstraIterator::path_to
pub struct DijkstraIterator<W: EdgeWeighter> {
    source: NodeId,
    weighter: W,
    heap: BinaryHeap<HeapEntry>,
    // Tentative cost of reached-but-unsettled nodes
    tentative: HashMap<NodeId, f64>,
    settled: HashMap<NodeId, f64>,
    parent: HashMap<NodeId, NodeId>,
    seq: u64,
    state: TraversalState,
}

impl<W: EdgeWeighter> DijkstraIterator<W> {
    /// Shortest-path traversal from `source` using `weighter`.
    pub fn new(source: NodeId, weighter: W) -> Self {
        Self {
            source,
            weighter,
            heap: BinaryHeap::new(),
            tentative: HashMap::new(),
            settled: HashMap::new(),
            parent: HashMap::new(),
            seq: 0,
            state: TraversalState::NotStarted,
        }
    }

    /// Final cost from the source to `node`, or `None` if not settled yet
    /// (still pending, or unreachable).
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.settled.get(&node).copied()
    }

    /// Settled shortest path from the source to `node`, inclusive of both
    /// endpoints. `None` if `node` is not settled yet.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.settled.contains_key(&node) {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some(prev) = self.parent.get(&current) {
            path.push(*prev);
            current = *prev;
        }
        path.reverse();
        Some(path)
    }

    fn push(&mut self, cost: f64, node: NodeId) {
        let entry = HeapEntry {
            cost,
            seq: self.seq,
            node,
        };
        self.seq += 1;
        self.heap.push(entry);
    }

    fn relax(&mut self, graph: &Graph, node: NodeId, cost: f64) -> Result<()> {
        let edge_ids: Vec<_> = graph.out_edges(node)?.to_vec();
        for edge_id in edge_ids {
            let edge = graph.get_edge(edge_id)?;
            let weight = self.weighter.weight(edge);
            if weight < 0.0 {
                self.state = TraversalState::Exhausted;
                return Err(GraphError::NegativeWeight { edge_id, weight });
            }

            let neighbor = edge.opposite(node);
            if self.settled.contains_key(&neighbor) {
                continue;
            }

            let candidate = cost + weight;
            let improved = self
                .tentative
                .get(&neighbor)
                .map_or(true, |best| candidate < *best);
            if improved {
                trace!("Relax node {neighbor}: cost {candidate} via edge {edge_id}");
                self.tentative.insert(neighbor, candidate);
                self.parent.insert(neighbor, node);
                self.push(candidate, neighbor);
            }
        }
        Ok(())
    }
}

impl<W: EdgeWeighter> Traversal for DijkstraIterator<W> {
    fn advance(&mut self, graph: &Graph) -> Result<Option<NodeId>> {
        match self.state {
            TraversalState::NotStarted => {
                graph.get_node(self.source)?;
                self.tentative.insert(self.source, 0.0);
                self.push(0.0, self.source);
                self.state = TraversalState::Iterating;
            }
            TraversalState::Iterating => {}
            TraversalState::Exhausted => return Err(GraphError::Exhausted),
        }

        while let Some(entry) = self.heap.pop() {
            // Stale entries: the node settled through a cheaper path already.
            if self.settled.contains_key(&entry.node) {
                continue;
            }

            self.settled.insert(entry.node, entry.cost);
            self.relax(graph, entry.node, entry.cost)?;
            return Ok(Some(entry.node));
        }

        self.state = TraversalState::Exhausted;
        Ok(None)
    }

    fn expand(&mut self, _graph: &Graph, _node: NodeId) -> Result<()> {
        // Relaxation already happened in advance(); pruning cannot affect
        // a shortest-path traversal.
        Ok(())
    }
}
