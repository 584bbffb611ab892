//! Canonical position keys.
//!
//! A [`BoardKey`] depends only on piece placement, never on history or
//! counters, so two states with the same grid share a key. It is used for
//! child deduplication in the search tree and for repetition tracking.

use serde::{Deserialize, Serialize};

use super::config::CELL_COUNT;
use super::side::Side;

/// Grid contents packed at 2 bits per cell (50 of 64 bits used).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(pub u64);

impl BoardKey {
    /// Pack a grid.
    #[must_use]
    pub fn from_grid(grid: &[Option<Side>; CELL_COUNT]) -> Self {
        let bits = grid.iter().enumerate().fold(0u64, |acc, (i, cell)| {
            let code: u64 = match cell {
                None => 0,
                Some(Side::Goat) => 1,
                Some(Side::Tiger) => 2,
            };
            acc | (code << (2 * i))
        });
        Self(bits)
    }

    /// Unpack the piece stored at a cell index.
    #[must_use]
    pub fn cell(self, index: usize) -> Option<Side> {
        match (self.0 >> (2 * index)) & 0b11 {
            1 => Some(Side::Goat),
            2 => Some(Side::Tiger),
            _ => None,
        }
    }
}

impl std::fmt::Display for BoardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..CELL_COUNT {
            let c = self.cell(i).map_or('.', Side::symbol);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_is_zero() {
        assert_eq!(BoardKey::from_grid(&[None; CELL_COUNT]), BoardKey(0));
    }

    #[test]
    fn test_cells_roundtrip() {
        let mut grid = [None; CELL_COUNT];
        grid[0] = Some(Side::Tiger);
        grid[12] = Some(Side::Goat);
        grid[24] = Some(Side::Tiger);

        let key = BoardKey::from_grid(&grid);
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(key.cell(i), *cell);
        }
    }

    #[test]
    fn test_distinct_grids_distinct_keys() {
        let mut a = [None; CELL_COUNT];
        let mut b = [None; CELL_COUNT];
        a[3] = Some(Side::Goat);
        b[3] = Some(Side::Tiger);
        assert_ne!(BoardKey::from_grid(&a), BoardKey::from_grid(&b));
    }

    #[test]
    fn test_display() {
        let mut grid = [None; CELL_COUNT];
        grid[0] = Some(Side::Tiger);
        grid[1] = Some(Side::Goat);
        let text = BoardKey::from_grid(&grid).to_string();
        assert_eq!(text.len(), CELL_COUNT);
        assert!(text.starts_with("TG."));
    }
}
