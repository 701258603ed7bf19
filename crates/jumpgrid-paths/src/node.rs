//! Search nodes and the append-only arena that owns them.

use jumpgrid_core::Point;

use crate::distance::manhattan;

/// Index of a [`Node`] inside a search's arena.
///
/// Ids are handed out in creation order, so a parent's id is always smaller
/// than its children's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered jump point.
///
/// Costs are fixed at creation: nodes are never updated in place, and a
/// position reached twice is simply a second node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub pos: Point,
    /// Cost from the start.
    pub g: i32,
    /// Heuristic estimate to the goal.
    pub h: i32,
    /// `g + h`, the open-set priority.
    pub f: i32,
    /// Direction of the jump that produced this node, zero for the start.
    pub dir: Point,
    /// Forced-neighbour direction found at this node, zero if none.
    pub forced: Point,
    pub parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn start(pos: Point, goal: Point) -> Self {
        let h = manhattan(pos, goal);
        Self {
            pos,
            g: 0,
            h,
            f: h,
            dir: Point::ZERO,
            forced: Point::ZERO,
            parent: None,
        }
    }

    pub(crate) fn successor(
        parent_id: NodeId,
        parent: &Node,
        pos: Point,
        dir: Point,
        forced: Point,
        goal: Point,
    ) -> Self {
        let g = parent.g + manhattan(parent.pos, pos);
        let h = manhattan(pos, goal);
        Self {
            pos,
            g,
            h,
            f: g + h,
            dir,
            forced,
            parent: Some(parent_id),
        }
    }

    /// Whether this is the start node of its search.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(node.parent.is_none_or(|p| p < id));
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Positions from the start node to `id`, both included.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = self.get(ci);
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_costs_use_manhattan_jumps() {
        let goal = Point::new(6, 3);
        let start = Node::start(Point::new(2, 7), goal);
        assert_eq!((start.g, start.h, start.f), (0, 8, 8));
        assert!(start.is_start());

        let mut arena = NodeArena::default();
        let sid = arena.push(start);
        let next = Node::successor(
            sid,
            &start,
            Point::new(3, 8),
            Point::new(1, 1),
            Point::ZERO,
            goal,
        );
        // The diagonal step costs 2 under the Manhattan metric.
        assert_eq!(next.g, 2);
        assert_eq!(next.h, 8);
        assert_eq!(next.f, 10);
        assert_eq!(next.parent, Some(sid));
        assert!(!next.is_start());
    }

    #[test]
    fn path_to_walks_parents_back_to_start() {
        let goal = Point::new(2, 0);
        let mut arena = NodeArena::default();
        let a = Node::start(Point::new(0, 2), goal);
        let aid = arena.push(a);
        let b = Node::successor(aid, &a, Point::new(1, 2), Point::new(1, 0), Point::new(1, -1), goal);
        let bid = arena.push(b);
        let c = Node::successor(bid, &b, Point::new(2, 1), Point::new(1, -1), Point::ZERO, goal);
        let cid = arena.push(c);
        let d = Node::successor(cid, &c, goal, Point::new(0, -1), Point::ZERO, goal);
        let did = arena.push(d);

        assert_eq!(arena.len(), 4);
        assert_eq!(did.index(), 3);
        assert_eq!(
            arena.path_to(did),
            vec![Point::new(0, 2), Point::new(1, 2), Point::new(2, 1), Point::new(2, 0)]
        );
        assert_eq!(arena.path_to(aid), vec![Point::new(0, 2)]);
    }
}
