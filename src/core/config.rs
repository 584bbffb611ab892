//! Fixed rule parameters.
//!
//! Bagh-Chal is played on a single board shape, so these are constants
//! rather than a runtime configuration. Search parameters live in
//! [`crate::mcts::MCTSConfig`].

/// Board width and height.
pub const BOARD_SIZE: usize = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tigers on the board at all times.
pub const TIGER_COUNT: usize = 4;

/// Tiger starting cells: the four corners.
pub const TIGER_START: [(u8, u8); TIGER_COUNT] = [(0, 0), (0, 4), (4, 0), (4, 4)];

/// Goats placed during the placement phase.
pub const GOAT_COUNT: u8 = 20;

/// Captures that win the game for the tigers.
pub const CAPTURE_LIMIT: u8 = 5;

/// Consecutive non-progressing plies that draw the game.
pub const STALE_PLY_LIMIT: u16 = 50;

/// Repeat count at which a position counts as repeated.
pub const REPETITION_LIMIT: u32 = 3;

/// Distinct positions remembered for repetition detection.
pub const PROGRESS_WINDOW: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiger_start_is_on_board() {
        for (row, col) in TIGER_START {
            assert!((row as usize) < BOARD_SIZE);
            assert!((col as usize) < BOARD_SIZE);
        }
    }

    #[test]
    fn test_goats_fit_on_board() {
        assert!(GOAT_COUNT as usize <= CELL_COUNT - TIGER_COUNT);
        assert!(CAPTURE_LIMIT < GOAT_COUNT);
    }
}
