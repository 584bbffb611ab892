//! Errors for rejected moves and rejected positions.

use thiserror::Error;

use super::coord::Coord;
use super::side::Side;

/// Reasons a requested placement or move cannot be applied.
///
/// Search never produces these: it only walks successors that are legal by
/// construction. They exist for callers applying human input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("no {expected} piece at {at}")]
    NotYourPiece { at: Coord, expected: Side },

    #[error("{from} -> {to} is not a legal move")]
    IllegalMove { from: Coord, to: Coord },

    #[error("all goats are placed; goats must move instead")]
    PlacementOver,

    #[error("goats must finish placing before moving")]
    PlacementPending,

    #[error("it is the {0}' turn")]
    WrongTurn(Side),

    #[error("the game is already over")]
    GameOver,
}

/// Reasons a position is rejected by `GameState::from_layout` or by
/// deserialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected {expected} tigers, got {actual}")]
    TigerCount { expected: usize, actual: usize },

    #[error("cell {0} holds more than one piece")]
    Overlap(Coord),

    #[error("placed count {0} exceeds the goat supply")]
    TooManyPlaced(u8),

    #[error("captured count {0} exceeds the capture limit")]
    TooManyCaptured(u8),

    #[error("{on_board} goats on the board but only {available} placed and uncaptured")]
    GoatSurplus { on_board: usize, available: usize },

    #[error("tiger list and grid disagree at {0}")]
    TigerMismatch(Coord),

    #[error("repetition window holds {0} entries")]
    WindowOverflow(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MoveError::Occupied(Coord::at(1, 2));
        assert_eq!(err.to_string(), "cell (1,2) is already occupied");

        let err = MoveError::WrongTurn(Side::Tiger);
        assert_eq!(err.to_string(), "it is the Tigers' turn");

        let err = LayoutError::TigerCount { expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "expected 4 tigers, got 3");
    }
}
