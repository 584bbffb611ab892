//! The two asymmetric roles of Bagh-Chal.
//!
//! ## Side
//!
//! Goats place pieces first and move them afterwards; tigers only move and
//! capture by jumping. A `Side` doubles as the piece stored in a grid cell.
//!
//! Scores in this crate are always expressed from the goats' point of view.
//! `Side::perspective` converts such a score into the point of view of a
//! given side.

use serde::{Deserialize, Serialize};

/// One of the two players, and the kind of piece that player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The placing side. Wins by blocking every tiger.
    Goat,
    /// The capturing side. Wins by capturing enough goats.
    Tiger,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Goat => Side::Tiger,
            Side::Tiger => Side::Goat,
        }
    }

    /// Sign that turns a goat-perspective score into this side's perspective.
    ///
    /// ```
    /// use baghchal_mcts::core::Side;
    ///
    /// assert_eq!(Side::Goat.perspective(), 1.0);
    /// assert_eq!(Side::Tiger.perspective(), -1.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn perspective(self) -> f64 {
        match self {
            Side::Goat => 1.0,
            Side::Tiger => -1.0,
        }
    }

    /// Single-character symbol used in logs.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::Goat => 'G',
            Side::Tiger => 'T',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Goat => write!(f, "Goats"),
            Side::Tiger => write!(f, "Tigers"),
        }
    }
}
