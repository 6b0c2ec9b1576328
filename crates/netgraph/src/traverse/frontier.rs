//! Frontier containers for topological traversal.
//!
//! Breadth-first and depth-first traversal share all of their logic; the
//! only difference is the order the frontier hands components back. That
//! order lives behind the [`Frontier`] trait: FIFO yields breadth-first,
//! LIFO yields depth-first.

use crate::graph::NodeId;
use std::collections::VecDeque;

/// A container of pending nodes awaiting a visit.
pub trait Frontier: Default {
    /// Add a node to the frontier.
    fn push(&mut self, node: NodeId);

    /// Take the next node, or `None` when the frontier is empty.
    fn pop(&mut self) -> Option<NodeId>;

    /// Whether the frontier holds no pending nodes.
    fn is_empty(&self) -> bool;
}

/// First-in-first-out frontier: breadth-first order.
#[derive(Debug, Default)]
pub struct Fifo(VecDeque<NodeId>);

impl Frontier for Fifo {
    fn push(&mut self, node: NodeId) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Last-in-first-out frontier: depth-first order.
#[derive(Debug, Default)]
pub struct Lifo(Vec<NodeId>);

impl Frontier for Lifo {
    fn push(&mut self, node: NodeId) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut f = Fifo::default();
        f.push(1);
        f.push(2);
        f.push(3);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_lifo_order() {
        let mut f = Lifo::default();
        f.push(1);
        f.push(2);
        f.push(3);
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), None);
    }
}
