//! Move descriptors.
//!
//! A [`Move`] names one ply: a goat placement, a single step by either side,
//! or a tiger jump that captures the goat it passes over. Legal moves are
//! produced by `GameState::legal_moves` and applied with `GameState::apply`.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// One ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a new goat on an empty cell.
    Place(Coord),
    /// Slide a piece one line to an empty neighbour.
    Step { from: Coord, to: Coord },
    /// Tiger jump over `over`, capturing the goat there.
    Jump { from: Coord, over: Coord, to: Coord },
}

impl Move {
    /// Destination cell.
    #[must_use]
    pub const fn to(self) -> Coord {
        match self {
            Move::Place(to) | Move::Step { to, .. } | Move::Jump { to, .. } => to,
        }
    }

    /// Origin cell, absent for placements.
    #[must_use]
    pub const fn from(self) -> Option<Coord> {
        match self {
            Move::Place(_) => None,
            Move::Step { from, .. } | Move::Jump { from, .. } => Some(from),
        }
    }

    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, Move::Jump { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(to) => write!(f, "place {to}"),
            Move::Step { from, to } => write!(f, "{from} -> {to}"),
            Move::Jump { from, over, to } => write!(f, "{from} x{over} -> {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let place = Move::Place(Coord::at(2, 2));
        assert_eq!(place.to(), Coord::at(2, 2));
        assert_eq!(place.from(), None);
        assert!(!place.is_capture());

        let jump = Move::Jump {
            from: Coord::at(0, 0),
            over: Coord::at(1, 1),
            to: Coord::at(2, 2),
        };
        assert_eq!(jump.from(), Some(Coord::at(0, 0)));
        assert!(jump.is_capture());
    }

    #[test]
    fn test_display() {
        let step = Move::Step {
            from: Coord::at(0, 0),
            to: Coord::at(0, 1),
        };
        assert_eq!(step.to_string(), "(0,0) -> (0,1)");
    }
}
