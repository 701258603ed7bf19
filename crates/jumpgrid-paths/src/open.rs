//! Open set: a min-heap of arena nodes ordered by `f`, oldest first on ties.

use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    id: NodeId,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f the older node wins.
        other.f.cmp(&self.f).then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of nodes keyed by `f`.
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<NodeRef>,
}

impl OpenSet {
    #[inline]
    pub(crate) fn push(&mut self, id: NodeId, f: i32) {
        self.heap.push(NodeRef { id, f });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|r| r.id)
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|r| r.id)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeArena};
    use jumpgrid_core::Point;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::default();
        (0..n)
            .map(|i| arena.push(Node::start(Point::new(i as i32, 0), Point::ZERO)))
            .collect()
    }

    #[test]
    fn pops_lowest_f_first() {
        let ids = ids(4);
        let mut open = OpenSet::default();
        open.push(ids[0], 7);
        open.push(ids[1], 3);
        open.push(ids[2], 9);
        open.push(ids[3], 5);
        assert_eq!(open.len(), 4);
        assert_eq!(open.peek(), Some(ids[1]));

        let order: Vec<_> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(order, vec![ids[1], ids[3], ids[0], ids[2]]);
        assert_eq!(open.len(), 0);
        assert_eq!(open.pop(), None);
        assert_eq!(open.peek(), None);
    }

    #[test]
    fn equal_f_pops_in_creation_order() {
        let ids = ids(3);
        let mut open = OpenSet::default();
        open.push(ids[2], 4);
        open.push(ids[0], 4);
        open.push(ids[1], 4);
        assert_eq!(open.pop(), Some(ids[0]));
        assert_eq!(open.pop(), Some(ids[1]));
        assert_eq!(open.pop(), Some(ids[2]));
    }
}
