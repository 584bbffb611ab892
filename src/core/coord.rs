//! Board coordinates.
//!
//! Rows and columns are 0-based. Text front ends that speak 1-based
//! `"row,col"` convert before calling [`Coord::new`].

use serde::{Deserialize, Serialize};

use super::config::{BOARD_SIZE, CELL_COUNT};
use super::error::MoveError;

/// A cell on the 5x5 board.
///
/// Deserializing goes through [`Coord::new`], so an off-board cell is an
/// error rather than a coordinate that panics on first use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = MoveError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// Create a coordinate, rejecting cells off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Unchecked constructor for constant tables.
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index into a 25-cell grid.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT)
            .then(|| Self::at((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8))
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }

    /// The cell `(dr, dc)` away, if it is on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Signed (row, col) difference `other - self`.
    #[inline]
    #[must_use]
    pub fn delta(self, other: Coord) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// The cell halfway to `other`, when both differences are even.
    #[must_use]
    pub fn midpoint(self, other: Coord) -> Option<Self> {
        let (dr, dc) = self.delta(other);
        if dr % 2 != 0 || dc % 2 != 0 {
            return None;
        }
        self.offset(dr / 2, dc / 2)
    }

    /// King-move distance.
    #[must_use]
    pub fn chebyshev(self, other: Coord) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
