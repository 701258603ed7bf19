//! The straight-line jump scan.
//!
//! From a starting cell the scan walks in one direction until it meets the
//! goal, a cell with a forced neighbour, or the edge of the walkable region.
//! A forced neighbour is detected by the "blocked beside, open ahead"
//! pattern: the cell next to the walker is blocked while the cell diagonally
//! past it is open, so the optimal route to that open cell goes through the
//! current position.
//!
//! Diagonal scans also run two straight sub-scans along their axis
//! components at every step. If either finds a jump point, the diagonal cell
//! becomes a waypoint.

use jumpgrid_core::Point;

use crate::traits::Walkable;

/// Outcome of a single jump scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    /// The scan reached the goal.
    Goal(Point),
    /// The scan stopped at `at` because of a forced neighbour in direction
    /// `forced`.
    Forced { at: Point, forced: Point },
    /// A diagonal scan stopped at a cell whose straight sub-scans found a
    /// jump point further on.
    Waypoint(Point),
    /// The scan left the walkable region.
    NotFound,
}

impl Jump {
    /// The jump point, if one was found.
    #[inline]
    pub fn point(self) -> Option<Point> {
        match self {
            Jump::Goal(p) | Jump::Waypoint(p) => Some(p),
            Jump::Forced { at, .. } => Some(at),
            Jump::NotFound => None,
        }
    }

    /// Forced-neighbour direction, zero unless the scan stopped on one.
    #[inline]
    pub fn forced(self) -> Point {
        match self {
            Jump::Forced { forced, .. } => forced,
            _ => Point::ZERO,
        }
    }

    #[inline]
    pub fn is_found(self) -> bool {
        !matches!(self, Jump::NotFound)
    }
}

/// Scan from `start` (inclusive) along `dir` for the next jump point.
///
/// `dir` is a unit step; a zero direction finds nothing.
pub fn jump<W: Walkable + ?Sized>(map: &W, start: Point, dir: Point, goal: Point) -> Jump {
    if dir.is_zero() {
        return Jump::NotFound;
    }
    let open = |p: Point| map.is_walkable(p);
    let (dx, dy) = (dir.x, dir.y);

    let mut p = start;
    while open(p) {
        if p == goal {
            return Jump::Goal(p);
        }

        if dir.is_diagonal() {
            if !open(p.shift(0, -dy)) && open(p.shift(dx, -dy)) {
                return Jump::Forced {
                    at: p,
                    forced: Point::new(dx, -dy),
                };
            }
            if !open(p.shift(-dx, 0)) && open(p.shift(-dx, dy)) {
                return Jump::Forced {
                    at: p,
                    forced: Point::new(-dx, dy),
                };
            }
            if jump(map, p.shift(dx, 0), Point::new(dx, 0), goal).is_found()
                || jump(map, p.shift(0, dy), Point::new(0, dy), goal).is_found()
            {
                return Jump::Waypoint(p);
            }
        } else if dx != 0 {
            if !open(p.shift(0, -1)) && open(p.shift(dx, -1)) {
                return Jump::Forced {
                    at: p,
                    forced: Point::new(dx, -1),
                };
            }
            if !open(p.shift(0, 1)) && open(p.shift(dx, 1)) {
                return Jump::Forced {
                    at: p,
                    forced: Point::new(dx, 1),
                };
            }
        } else {
            if !open(p.shift(-1, 0)) && open(p.shift(-1, dy)) {
                return Jump::Forced {
                    at: p,
                    forced: Point::new(-1, dy),
                };
            }
            if !open(p.shift(1, 0)) && open(p.shift(1, dy)) {
                return Jump::Forced {
                    at: p,
                    forced: Point::new(1, dy),
                };
            }
        }

        p = p + dir;
    }
    Jump::NotFound
}
