//! Grid coordinates and torus wrap-around.
//!
//! ## Position
//!
//! A `(row, col)` pair that always lies inside some board. Positions are
//! only produced by bounds-checked constructors or by [`wrap`], so every
//! `Position` a board hands out is valid for that board.
//!
//! ## Wrap-around
//!
//! Movement, shots and vortex knockback never leave the grid. Any target
//! computed outside `[0, dimension)` re-enters on the opposite edge:
//!
//! ```
//! use fountain_cavern::core::wrap;
//!
//! assert_eq!(wrap(-1, 4), 3);
//! assert_eq!(wrap(4, 4), 0);
//! assert_eq!(wrap(2, 4), 2);
//! assert_eq!(wrap(-9, 4), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Normalize a coordinate onto `[0, dimension)` with modular wrap.
///
/// Defined for every integer. In-bounds values are returned unchanged.
///
/// # Panics
///
/// Panics if `dimension` is zero.
#[must_use]
pub fn wrap(value: i64, dimension: usize) -> usize {
    assert!(dimension > 0, "Cannot wrap onto an empty axis");
    let dimension = dimension as i64;
    (((value % dimension) + dimension) % dimension) as usize
}

/// A cell coordinate on a square board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, wrapping both axes onto the board.
    #[must_use]
    pub fn offset_wrapped(self, d_row: i64, d_col: i64, dimension: usize) -> Self {
        Self {
            row: wrap(self.row as i64 + d_row, dimension),
            col: wrap(self.col as i64 + d_col, dimension),
        }
    }

    /// Step one cell in a cardinal direction, wrapping at the edges.
    #[must_use]
    pub fn step(self, direction: Direction, dimension: usize) -> Self {
        let (d_row, d_col) = direction.delta();
        self.offset_wrapped(d_row, d_col, dimension)
    }

    /// Chebyshev distance between two positions, without wrap.
    #[must_use]
    pub fn chebyshev(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Check whether this position is one of the four corners.
    #[must_use]
    pub fn is_corner(self, dimension: usize) -> bool {
        let last = dimension.saturating_sub(1);
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Row={}, Column={})", self.row, self.col)
    }
}

/// Cardinal direction for movement and shooting.
///
/// North is row - 1, East is col + 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions in menu order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit `(row, col)` offset for this direction.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Lowercase name as typed by the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        f.write_str(name)
    }
}
