//! Neighbour pruning: which directions a node is expanded in.

use jumpgrid_core::Point;

use crate::node::Node;

/// Every compass direction, in the order the start node probes them:
/// north, south, west, east, then the four diagonals.
pub const ALL_DIRECTIONS: [Point; 8] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

/// Pruned direction set for `node`.
///
/// The start node probes all eight directions. Any other node keeps moving
/// the way it arrived (plus both axis components of a diagonal arrival),
/// and additionally probes the forced-neighbour direction recorded when it
/// was found. Every other neighbour is reachable at no greater cost through
/// the parent, so expanding it would only repeat work.
pub fn directions(node: &Node) -> Vec<Point> {
    if node.is_start() {
        return ALL_DIRECTIONS.to_vec();
    }

    let d = node.dir;
    let mut dirs = Vec::with_capacity(4);
    if d.is_diagonal() {
        dirs.push(d);
        dirs.push(Point::new(d.x, 0));
        dirs.push(Point::new(0, d.y));
    } else {
        dirs.push(d);
    }
    if !node.forced.is_zero() {
        dirs.push(node.forced);
    }
    dirs
}
