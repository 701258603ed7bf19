use jumpgrid_core::{Grid, Point};

/// Walkability oracle queried by the search.
///
/// Implementations must be pure: the same point always gives the same
/// answer for the lifetime of a search. Points outside the map are not
/// walkable.
pub trait Walkable {
    /// Whether `p` is inside the map and not blocked.
    fn is_walkable(&self, p: Point) -> bool;
}

impl Walkable for Grid {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        Grid::is_walkable(self, p)
    }
}

/// Adapter that turns a predicate into a [`Walkable`] map.
///
/// ```
/// use jumpgrid_core::Point;
/// use jumpgrid_paths::{Passable, find_path};
///
/// let open = Passable(|p: Point| (0..4).contains(&p.x) && (0..4).contains(&p.y));
/// let path = find_path(Point::new(0, 0), Point::new(3, 3), &open);
/// assert_eq!(path, vec![Point::new(0, 0), Point::new(3, 3)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Passable<F>(pub F);

impl<F: Fn(Point) -> bool> Walkable for Passable<F> {
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (self.0)(p)
    }
}
