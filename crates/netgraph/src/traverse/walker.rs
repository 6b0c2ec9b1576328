//! Walker and visitor: driving a traversal against a callback.

use super::Traversal;
use crate::error::Result;
use crate::graph::{Graph, Node};
use log::trace;

/// Visitor verdict controlling the walk.
///
/// An explicit result value checked after every visit; control flow never
/// unwinds through the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going; expand the current component's successors
    Continue,
    /// Terminate the entire walk immediately
    Stop,
    /// Keep going but skip the current component's successors
    /// (no effect on shortest-path traversals)
    Prune,
}

/// Callback invoked once per visited component.
pub trait GraphVisitor {
    /// Process a component and return the verdict for the walk.
    fn visit(&mut self, graph: &Graph, node: &Node) -> Control;
}

impl<F: FnMut(&Graph, &Node) -> Control> GraphVisitor for F {
    fn visit(&mut self, graph: &Graph, node: &Node) -> Control {
        self(graph, node)
    }
}

/// Summary of a completed walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walk {
    /// Number of components the visitor saw
    pub visited: usize,
    /// Whether the visitor cut the walk short with [`Control::Stop`]
    pub stopped: bool,
}

/// Drives a traversal against a visitor.
pub struct GraphWalker;

impl GraphWalker {
    /// Pull components from `traversal` and hand each to `visitor` until the
    /// traversal is exhausted or the visitor returns [`Control::Stop`].
    ///
    /// [`Control::Stop`] is honored immediately: no further queued
    /// components are visited. [`Control::Prune`] suppresses expansion of
    /// the current component only.
    ///
    /// # Errors
    ///
    /// Propagates traversal errors (e.g. negative weights) and lookup
    /// failures for components removed out from under the traversal.
    pub fn walk<T, V>(graph: &Graph, traversal: &mut T, visitor: &mut V) -> Result<Walk>
    where
        T: Traversal,
        V: GraphVisitor,
    {
        let mut visited = 0;

        while let Some(id) = traversal.advance(graph)? {
            let node = graph.get_node(id)?;
            visited += 1;

            match visitor.visit(graph, node) {
                Control::Stop => {
                    trace!("Walk stopped by visitor after {visited} visit(s)");
                    return Ok(Walk {
                        visited,
                        stopped: true,
                    });
                }
                Control::Prune => {}
                Control::Continue => traversal.expand(graph, id)?,
            }
        }

        trace!("Walk complete: {visited} visit(s)");
        Ok(Walk {
            visited,
            stopped: false,
        })
    }
}
