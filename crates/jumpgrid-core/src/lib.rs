//! **jumpgrid-core**: core types for grid pathfinding.
//!
//! This crate provides the foundational types used across *jumpgrid*:
//! integer geometry primitives and a rectangular grid of open/blocked cells
//! that answers walkability queries.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridError, Tile};
