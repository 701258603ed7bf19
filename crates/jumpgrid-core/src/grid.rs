//! A binary walkability grid.
//!
//! [`Grid`] stores one [`Tile`] per cell in row-major order and answers the
//! single question pathfinding asks of it: is this position walkable?
//! Positions are `(x, y)` with `x` selecting the column and `y` the row.
//!
//! Grids can be built from rows (`rows[y][x]`), from columns (`cols[x][y]`,
//! transposed on entry), or from ASCII art where `#` is blocked and `.` is
//! open. Every constructor checks that the input is rectangular.

use crate::geom::{Point, Range};
use std::fmt;

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Blocked,
}

impl Tile {
    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }

    /// ASCII form used by [`Grid::parse`] and the `Display` impl.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Blocked => '#',
        }
    }

    /// Inverse of [`as_char`](Self::as_char).
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Open),
            '#' => Some(Tile::Blocked),
            _ => None,
        }
    }
}

/// Integer matrices use `0` for open and anything else for blocked.
impl From<i32> for Tile {
    fn from(v: i32) -> Self {
        if v == 0 { Tile::Open } else { Tile::Blocked }
    }
}

/// An immutable-shape rectangular grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a new grid with every cell open. Negative sizes are clamped
    /// to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Tile::Open; (width as usize) * (height as usize)],
        }
    }

    /// Build a grid from rows, so that `rows[y][x]` is the cell at `(x, y)`.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<Tile>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let (w, h) = checked_dims(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (line, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&t| t.into()));
        }
        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    /// Build a grid from columns, so that `cols[x][y]` is the cell at `(x, y)`.
    ///
    /// This is the transpose of [`from_rows`](Self::from_rows), for callers
    /// whose matrices index the x axis first.
    pub fn from_columns<C, T>(cols: &[C]) -> Result<Self, GridError>
    where
        C: AsRef<[T]>,
        T: Copy + Into<Tile>,
    {
        let width = cols.len();
        let height = cols.first().map_or(0, |c| c.as_ref().len());
        let (w, h) = checked_dims(width, height)?;

        let mut cells = vec![Tile::Open; width * height];
        for (x, col) in cols.iter().enumerate() {
            let col = col.as_ref();
            if col.len() != height {
                return Err(GridError::Ragged {
                    line: x,
                    expected: height,
                    found: col.len(),
                });
            }
            for (y, &t) in col.iter().enumerate() {
                cells[y * width + x] = t.into();
            }
        }
        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    /// Parse ASCII art: one line per row, `#` blocked, `.` open.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Width of the grid (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid's bounds, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = tile;
    }

    /// Walkability check: out-of-bounds positions count as blocked.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.width as usize) + p.x as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width as usize;
        for (y, row) in self.cells.chunks(w.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.as_char())?;
            }
        }
        Ok(())
    }
}

fn checked_dims(width: usize, height: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

/// Serialized form of a [`Grid`], validated on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let expected = (raw.width.max(0) as usize) * (raw.height.max(0) as usize);
        if raw.width < 0 || raw.height < 0 || raw.cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row (or column, for [`Grid::from_columns`]) has a different length
    /// than the first one.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension does not fit in an `i32` coordinate.
    TooLarge { width: usize, height: usize },
    /// [`Grid::parse`] found a character other than `#` or `.`.
    InvalidChar { ch: char, pos: Point },
    /// Cell data does not match the declared width and height.
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has length {found}, expected {expected}"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "grid: size {width}x{height} exceeds coordinate range")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
