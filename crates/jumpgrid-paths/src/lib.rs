//! Jump Point Search pathfinding on binary grids.
//!
//! JPS is an A* variant for uniform-cost grids. Instead of pushing every
//! neighbour of an expanded cell, it scans straight lines and only queues
//! *jump points*: the goal, or cells where an obstacle forces a turn. The
//! returned path is the sequence of those jump points, each pair joined by a
//! horizontal, vertical or diagonal line.
//!
//! ```
//! use jumpgrid_core::{Grid, Point};
//! use jumpgrid_paths::find_path;
//!
//! let grid = Grid::parse(".#.\n.#.\n...").unwrap();
//! let path = find_path(Point::new(0, 2), Point::new(2, 0), &grid);
//! assert_eq!(
//!     path,
//!     [Point::new(0, 2), Point::new(1, 2), Point::new(2, 1), Point::new(2, 0)]
//! );
//! ```
//!
//! | Item | Role |
//! |---|---|
//! | [`find_path`] / [`find_path_with`] | one-shot search |
//! | [`JumpSearch`] | steppable search with [`SearchStats`] |
//! | [`jump`] | a single straight-line scan |
//! | [`Walkable`] | the walkability oracle the search queries |
//!
//! Costs use the Manhattan metric throughout, including for diagonal jumps.
//! Diagonal moves may pass between two blocked orthogonal cells.

mod distance;
mod jump;
mod node;
mod open;
mod path;
mod prune;
mod search;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use jump::{Jump, jump};
pub use node::{Node, NodeId};
pub use path::{expand_path, is_straight_segment, path_cost};
pub use prune::{ALL_DIRECTIONS, directions};
pub use search::{
    DuplicatePolicy, JumpSearch, SearchConfig, SearchState, SearchStats, find_path,
    find_path_with,
};
pub use traits::{Passable, Walkable};
