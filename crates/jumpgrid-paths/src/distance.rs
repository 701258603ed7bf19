use jumpgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The search uses it both as the heuristic and as the cost of a jump,
/// diagonal jumps included.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points: the number of king moves
/// separating them.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
