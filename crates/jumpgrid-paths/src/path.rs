//! Helpers for jump-point paths returned by [`find_path`](crate::find_path).

use jumpgrid_core::Point;

use crate::distance::{chebyshev, manhattan};

/// Whether `b` can be reached from `a` by repeating one unit step:
/// horizontally, vertically or along a 45° diagonal.
#[inline]
pub fn is_straight_segment(a: Point, b: Point) -> bool {
    let d = b - a;
    a != b && (d.x == 0 || d.y == 0 || d.x.abs() == d.y.abs())
}

/// Total cost of a path under the search's metric: the sum of the
/// Manhattan lengths of its segments.
///
/// For a path returned by the search this equals the goal node's `g`.
pub fn path_cost(path: &[Point]) -> i32 {
    path.windows(2).map(|w| manhattan(w[0], w[1])).sum()
}

/// Expand a jump-point path into a step-by-step path.
///
/// Every consecutive pair of the result is one king move apart. Segments
/// that are not straight are walked diagonally first, then straight.
pub fn expand_path(jump_points: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = jump_points.split_first() else {
        return Vec::new();
    };
    let steps: usize = jump_points
        .windows(2)
        .map(|w| chebyshev(w[0], w[1]) as usize)
        .sum();
    let mut result = Vec::with_capacity(steps + 1);
    result.push(first);

    let mut c = first;
    for &target in rest {
        while c != target {
            c = c + (target - c).signum();
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn straight_segments() {
        assert!(is_straight_segment(p(0, 0), p(5, 0)));
        assert!(is_straight_segment(p(0, 0), p(0, -2)));
        assert!(is_straight_segment(p(2, 7), p(3, 8)));
        assert!(is_straight_segment(p(5, 7), p(3, 9)));
        assert!(!is_straight_segment(p(0, 0), p(2, 1)));
        assert!(!is_straight_segment(p(1, 1), p(1, 1)));
    }

    #[test]
    fn cost_counts_diagonals_as_two() {
        let path = [p(0, 2), p(1, 2), p(2, 1), p(2, 0)];
        assert_eq!(path_cost(&path), 4);
        assert_eq!(path_cost(&[p(3, 3)]), 0);
        assert_eq!(path_cost(&[]), 0);
    }

    #[test]
    fn expand_fills_in_cells() {
        let path = [p(2, 7), p(3, 8), p(4, 8), p(5, 7), p(6, 6), p(6, 3)];
        assert_eq!(
            expand_path(&path),
            vec![
                p(2, 7),
                p(3, 8),
                p(4, 8),
                p(5, 7),
                p(6, 6),
                p(6, 5),
                p(6, 4),
                p(6, 3)
            ]
        );
    }

    #[test]
    fn expand_bent_segment_goes_diagonal_first() {
        assert_eq!(
            expand_path(&[p(0, 0), p(3, 1)]),
            vec![p(0, 0), p(1, 1), p(2, 1), p(3, 1)]
        );
    }

    #[test]
    fn expand_trivial_paths() {
        assert!(expand_path(&[]).is_empty());
        assert_eq!(expand_path(&[p(4, 4)]), vec![p(4, 4)]);
    }
}
