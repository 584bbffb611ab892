//! Game-over detection.
//!
//! Checked in a fixed order so a position meeting several end conditions
//! has one answer: five captures first, then blocked tigers, then a draw.

use serde::{Deserialize, Serialize};

use crate::core::config::{CAPTURE_LIMIT, REPETITION_LIMIT, STALE_PLY_LIMIT};
use crate::core::{GameState, Side};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every tiger is blocked.
    GoatsWin,
    /// Enough goats were captured.
    TigersWin,
    /// Repetition or stale plies.
    Draw,
}

impl GameResult {
    /// Winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::GoatsWin => Some(Side::Goat),
            GameResult::TigersWin => Some(Side::Tiger),
            GameResult::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// +1 for a goat win, -1 for a tiger win, 0 for a draw.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            GameResult::GoatsWin => 1.0,
            GameResult::TigersWin => -1.0,
            GameResult::Draw => 0.0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::GoatsWin => write!(f, "goats win"),
            GameResult::TigersWin => write!(f, "tigers win"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

impl GameState {
    /// No tiger has a step or a capture, whoever is to move.
    #[must_use]
    pub fn is_tigers_blocked(&self) -> bool {
        !self
            .tigers()
            .iter()
            .any(|&from| self.piece_can_move(Side::Tiger, from))
    }

    #[must_use]
    pub fn is_capture_threshold_reached(&self) -> bool {
        self.captured() >= CAPTURE_LIMIT
    }

    /// Stale-ply limit reached, or both remembered positions seen often enough.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.stale_plies() >= STALE_PLY_LIMIT
            || self.progress().repeated(REPETITION_LIMIT) >= 2
    }

    /// The result, or `None` while the game is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if self.is_capture_threshold_reached() {
            Some(GameResult::TigersWin)
        } else if self.is_tigers_blocked() {
            Some(GameResult::GoatsWin)
        } else if self.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// Game over, or the side to move has nothing to play.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some() || !self.has_legal_move()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GOAT_COUNT;
    use crate::core::Coord;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    /// Seventeen goats sealing every corner tiger.
    fn blockade_goats() -> Vec<Coord> {
        vec![
            c(0, 1),
            c(1, 0),
            c(1, 1),
            c(0, 2),
            c(2, 0),
            c(2, 2),
            c(0, 3),
            c(1, 4),
            c(1, 3),
            c(2, 4),
            c(3, 0),
            c(4, 1),
            c(3, 1),
            c(4, 2),
            c(3, 4),
            c(4, 3),
            c(3, 3),
        ]
    }

    #[test]
    fn test_result_helpers() {
        assert_eq!(GameResult::GoatsWin.winner(), Some(Side::Goat));
        assert!(GameResult::TigersWin.is_winner(Side::Tiger));
        assert!(!GameResult::Draw.is_winner(Side::Goat));
        assert_eq!(GameResult::Draw.score(), 0.0);
        assert_eq!(GameResult::GoatsWin.to_string(), "goats win");
    }

    #[test]
    fn test_new_game_is_running() {
        let state = GameState::new();
        assert_eq!(state.outcome(), None);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_capture_threshold() {
        let tigers = [c(0, 0), c(0, 4), c(4, 0), c(4, 4)];
        let state = GameState::from_layout(&tigers, &[], Side::Goat, 10, 5).unwrap();
        assert!(state.is_capture_threshold_reached());
        assert_eq!(state.outcome(), Some(GameResult::TigersWin));
    }

    #[test]
    fn test_blocked_tigers_on_either_turn() {
        // Every tiger walled in, with goats behind the goats it could jump.
        let tigers = [c(0, 0), c(0, 4), c(4, 0), c(4, 4)];
        let goats = blockade_goats();
        for side in [Side::Goat, Side::Tiger] {
            let state = GameState::from_layout(&tigers, &goats, side, GOAT_COUNT, 0).unwrap();
            assert!(state.is_tigers_blocked());
            assert_eq!(state.outcome(), Some(GameResult::GoatsWin));
        }
    }

    #[test]
    fn test_capture_beats_block() {
        let tigers = [c(0, 0), c(0, 4), c(4, 0), c(4, 4)];
        let goats = blockade_goats();
        let state = GameState::from_layout(&tigers, &goats, Side::Goat, GOAT_COUNT, 3).unwrap();
        assert_eq!(state.outcome(), Some(GameResult::GoatsWin));

        let state =
            GameState::from_layout(&tigers, &goats[..15], Side::Goat, GOAT_COUNT, 5).unwrap();
        assert_eq!(state.outcome(), Some(GameResult::TigersWin));
    }

    #[test]
    fn test_repetition_draw() {
        // Two grids alternating in the window, each seen three times.
        let mut state = GameState::new();
        let toggled = c(2, 2);
        let mut plies = 0;
        while !state.is_draw() {
            let piece = if state.is_empty(toggled) { Some(Side::Goat) } else { None };
            state.set(toggled, piece);
            state.finish_ply(false);
            plies += 1;
            assert!(plies < 10, "repetition never detected");
        }
        assert_eq!(plies, 5);
        assert_eq!(state.progress().repeated(REPETITION_LIMIT), 2);
        assert_eq!(state.outcome(), Some(GameResult::Draw));
    }

    #[test]
    fn test_stale_draw() {
        let mut state = GameState::new();
        for _ in 0..STALE_PLY_LIMIT - 1 {
            state.finish_ply(false);
        }
        assert_eq!(state.stale_plies(), STALE_PLY_LIMIT - 1);
        state.finish_ply(false);
        assert!(state.is_draw());
    }
}
