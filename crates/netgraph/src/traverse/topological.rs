//! Topological traversal over a frontier container.

use super::frontier::{Fifo, Frontier, Lifo};
use super::{Traversal, TraversalState};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId, Orientation};
use log::trace;
use std::collections::HashSet;

/// Traversal visiting components in reachability order from the graph's
/// source components.
///
/// Seeding depends on orientation: a directed graph seeds every node with
/// zero in-degree; an undirected graph seeds every node. Expansion follows
/// out-related components. Two consequences are part of the contract:
///
/// - a directed graph whose nodes all sit on cycles has no seeds and yields
///   an empty traversal;
/// - directed components unreachable from any zero-in-degree node are never
///   visited.
///
/// The frontier type fixes the visit order: [`BreadthFirstIterator`] (FIFO)
/// and [`DepthFirstIterator`] (LIFO) are the two instantiations.
pub struct TopologicalIterator<F: Frontier> {
    frontier: F,
    visited: HashSet<NodeId>,
    seeds: Option<Vec<NodeId>>,
    state: TraversalState,
}

/// Breadth-first topological traversal.
pub type BreadthFirstIterator = TopologicalIterator<Fifo>;

/// Depth-first topological traversal.
pub type DepthFirstIterator = TopologicalIterator<Lifo>;

impl<F: Frontier> TopologicalIterator<F> {
    /// Traversal seeded from the graph's source components.
    pub fn new() -> Self {
        Self {
            frontier: F::default(),
            visited: HashSet::new(),
            seeds: None,
            state: TraversalState::NotStarted,
        }
    }

    /// Traversal seeded from explicit nodes instead of the graph's sources.
    ///
    /// Used for reachability queries from a chosen starting point.
    pub fn from_seeds(seeds: Vec<NodeId>) -> Self {
        Self {
            frontier: F::default(),
            visited: HashSet::new(),
            seeds: Some(seeds),
            state: TraversalState::NotStarted,
        }
    }

    fn seed(&mut self, graph: &Graph) -> Result<()> {
        let seeds = match self.seeds.take() {
            Some(explicit) => {
                for id in &explicit {
                    graph.get_node(*id)?;
                }
                explicit
            }
            None => {
                // Sorted ids keep seeding deterministic across runs.
                let mut seeds = Vec::new();
                for id in graph.node_ids() {
                    let is_source = match graph.orientation() {
                        Orientation::Directed => graph.in_degree(id)? == 0,
                        Orientation::Undirected => true,
                    };
                    if is_source {
                        seeds.push(id);
                    }
                }
                seeds
            }
        };

        trace!("Seeding traversal with {} source(s)", seeds.len());
        for id in seeds {
            self.frontier.push(id);
        }
        Ok(())
    }
}

impl<F: Frontier> Default for TopologicalIterator<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Frontier> Traversal for TopologicalIterator<F> {
    fn advance(&mut self, graph: &Graph) -> Result<Option<NodeId>> {
        match self.state {
            TraversalState::NotStarted => {
                self.seed(graph)?;
                self.state = TraversalState::Iterating;
            }
            TraversalState::Iterating => {}
            TraversalState::Exhausted => return Err(GraphError::Exhausted),
        }

        while let Some(id) = self.frontier.pop() {
            if self.visited.insert(id) {
                return Ok(Some(id));
            }
        }

        self.state = TraversalState::Exhausted;
        Ok(None)
    }

    fn expand(&mut self, graph: &Graph, node: NodeId) -> Result<()> {
        for related in graph.out_related(node)? {
            if !self.visited.contains(&related) {
                self.frontier.push(related);
            }
        }
        Ok(())
    }
}
