use std::collections::VecDeque;

use crate::graph::NodePos;

/// The set of discovered-but-not-yet-processed nodes of a walk.
///
/// The frontier discipline is the *only* difference between BFS and DFS: a
/// FIFO queue expands level by level, a LIFO stack dives depth-first. The walk
/// itself is written once against this trait.
pub trait Frontier: Default {
    fn push(&mut self, node: NodePos);
    fn pop(&mut self) -> Option<NodePos>;
}

/// First-in-first-out frontier: breadth-first expansion.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodePos>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodePos) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodePos> {
        self.queue.pop_front()
    }
}

/// Last-in-first-out frontier: depth-first expansion.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodePos>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: NodePos) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<NodePos> {
        self.stack.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32) -> NodePos {
        NodePos::new(x, 0)
    }

    #[test]
    fn fifo_pops_oldest_first() {
        let mut f = FifoFrontier::default();
        f.push(pos(1));
        f.push(pos(2));
        f.push(pos(3));

        assert_eq!(f.pop(), Some(pos(1)));
        assert_eq!(f.pop(), Some(pos(2)));
        assert_eq!(f.pop(), Some(pos(3)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn lifo_pops_newest_first() {
        let mut f = LifoFrontier::default();
        f.push(pos(1));
        f.push(pos(2));
        f.push(pos(3));

        assert_eq!(f.pop(), Some(pos(3)));
        assert_eq!(f.pop(), Some(pos(2)));
        assert_eq!(f.pop(), Some(pos(1)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn interleaved_push_pop_keeps_discipline() {
        let mut q = FifoFrontier::default();
        q.push(pos(1));
        q.push(pos(2));
        assert_eq!(q.pop(), Some(pos(1)));
        q.push(pos(3));
        assert_eq!(q.pop(), Some(pos(2)));
        assert_eq!(q.pop(), Some(pos(3)));

        let mut s = LifoFrontier::default();
        s.push(pos(1));
        s.push(pos(2));
        assert_eq!(s.pop(), Some(pos(2)));
        s.push(pos(3));
        assert_eq!(s.pop(), Some(pos(3)));
        assert_eq!(s.pop(), Some(pos(1)));
    }

    #[test]
    fn empty_frontiers_pop_none() {
        assert_eq!(FifoFrontier::default().pop(), None);
        assert_eq!(LifoFrontier::default().pop(), None);
    }
}
