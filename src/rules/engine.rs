//! Move legality, move generation and move application.
//!
//! A move from `start` to `end` is legal when:
//! - `end` is empty,
//! - `{start, end}` is not one of the missing diagonals,
//! - the offset is a single orthogonal or diagonal step, or, for tigers
//!   only, a jump along a line whose midpoint holds a goat.
//!
//! The jump test is also the capture test: applying a legal jump removes the
//! goat it passes over.
//!
//! Progress (for the stale-ply draw rule) is a placement, a capture, or a
//! change in whether the goats have any step available on the board.

use crate::core::lattice::{
    candidate_targets, is_absent_edge, is_step_shape, jump_midpoint, neighbours,
};
use crate::core::{Coord, GameState, Move, MoveError, Side};

impl GameState {
    /// Whether the side to move may go from `start` to `end`.
    ///
    /// Does not check who stands on `start`; see [`GameState::move_piece`]
    /// for the fully checked variant.
    #[must_use]
    pub fn is_legal_move(&self, start: Coord, end: Coord) -> bool {
        self.is_legal_for(self.to_move(), start, end)
    }

    /// [`GameState::is_legal_move`] for an explicit side.
    #[must_use]
    pub fn is_legal_for(&self, side: Side, start: Coord, end: Coord) -> bool {
        if !self.is_empty(end) || is_absent_edge(start, end) {
            return false;
        }
        if is_step_shape(start, end) {
            return true;
        }
        side == Side::Tiger && self.capture_over(start, end).is_some()
    }

    /// The goat captured by jumping `start -> end`, if that jump is on a line.
    #[must_use]
    pub fn capture_over(&self, start: Coord, end: Coord) -> Option<Coord> {
        jump_midpoint(start, end).filter(|&mid| self.at(mid) == Some(Side::Goat))
    }

    /// Every legal move for the side to move.
    ///
    /// An empty result means the side to move is stuck.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.to_move() {
            Side::Goat if self.in_placement() => self.empty_cells().map(Move::Place).collect(),
            Side::Goat => self
                .goats()
                .flat_map(|from| self.piece_moves(Side::Goat, from))
                .collect(),
            Side::Tiger => self
                .tigers()
                .iter()
                .flat_map(|&from| self.piece_moves(Side::Tiger, from))
                .collect(),
        }
    }

    fn piece_moves(&self, side: Side, from: Coord) -> impl Iterator<Item = Move> + '_ {
        candidate_targets(from)
            .filter(move |&to| self.is_legal_for(side, from, to))
            .map(move |to| match self.capture_over(from, to) {
                Some(over) if side == Side::Tiger && !is_step_shape(from, to) => {
                    Move::Jump { from, over, to }
                }
                _ => Move::Step { from, to },
            })
    }

    /// Whether the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        match self.to_move() {
            Side::Goat if self.in_placement() => self.empty_cells().next().is_some(),
            Side::Goat => self.goats().any(|from| self.piece_can_move(Side::Goat, from)),
            Side::Tiger => self.tigers().iter().any(|&from| self.piece_can_move(Side::Tiger, from)),
        }
    }

    pub(crate) fn piece_can_move(&self, side: Side, from: Coord) -> bool {
        candidate_targets(from).any(|to| self.is_legal_for(side, from, to))
    }

    /// Whether any goat has an empty neighbour to step to.
    #[must_use]
    pub fn goats_mobile(&self) -> bool {
        self.goats()
            .any(|from| neighbours(from).any(|to| self.is_empty(to)))
    }

    /// All successor positions, one per legal move.
    #[must_use]
    pub fn successors(&self) -> Vec<GameState> {
        let mobile = self.goats_mobile();
        self.legal_moves()
            .into_iter()
            .map(|mv| self.apply_with(mv, mobile))
            .collect()
    }

    /// Apply a move taken from [`GameState::legal_moves`].
    ///
    /// The move is trusted; use [`GameState::place`] or
    /// [`GameState::move_piece`] for unchecked input.
    #[must_use]
    pub fn apply(&self, mv: Move) -> GameState {
        self.apply_with(mv, self.goats_mobile())
    }

    fn apply_with(&self, mv: Move, goats_mobile_before: bool) -> GameState {
        let mut next = self.clone();
        let progress = match mv {
            Move::Place(to) => {
                next.set(to, Some(Side::Goat));
                next.record_placement();
                true
            }
            Move::Jump { from, over, to } => {
                next.relocate_tiger(from, to);
                next.set(over, None);
                next.record_capture();
                true
            }
            Move::Step { from, to } => {
                match self.at(from) {
                    Some(Side::Tiger) => next.relocate_tiger(from, to),
                    piece => {
                        next.set(from, None);
                        next.set(to, piece);
                    }
                }
                next.goats_mobile() != goats_mobile_before
            }
        };
        next.finish_ply(progress);
        next
    }

    /// Place a goat, validating turn, phase and occupancy.
    pub fn place(&self, at: Coord) -> Result<GameState, MoveError> {
        if self.outcome().is_some() {
            return Err(MoveError::GameOver);
        }
        if self.to_move() != Side::Goat {
            return Err(MoveError::WrongTurn(self.to_move()));
        }
        if !self.in_placement() {
            return Err(MoveError::PlacementOver);
        }
        if !self.is_empty(at) {
            return Err(MoveError::Occupied(at));
        }
        Ok(self.apply(Move::Place(at)))
    }

    /// Move the piece on `from` to `to`, validating ownership, phase and legality.
    pub fn move_piece(&self, from: Coord, to: Coord) -> Result<GameState, MoveError> {
        if self.outcome().is_some() {
            return Err(MoveError::GameOver);
        }
        let side = self.to_move();
        if self.at(from) != Some(side) {
            return Err(MoveError::NotYourPiece { at: from, expected: side });
        }
        if side == Side::Goat && self.in_placement() {
            return Err(MoveError::PlacementPending);
        }
        if !self.is_legal_move(from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        let mv = match self.capture_over(from, to) {
            Some(over) if !is_step_shape(from, to) => Move::Jump { from, over, to },
            _ => Move::Step { from, to },
        };
        Ok(self.apply(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CELL_COUNT, GOAT_COUNT, TIGER_COUNT};

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn corners() -> [Coord; 4] {
        [c(0, 0), c(0, 4), c(4, 0), c(4, 4)]
    }

    #[test]
    fn test_opening_successors() {
        let state = GameState::new();
        let succ = state.successors();

        assert_eq!(succ.len(), CELL_COUNT - TIGER_COUNT);
        for s in &succ {
            assert_eq!(s.placed(), 1);
            assert_eq!(s.to_move(), Side::Tiger);
            assert_eq!(s.goats().count(), 1);
        }
    }

    #[test]
    fn test_step_legality() {
        let state = GameState::new();
        assert!(state.is_legal_move(c(0, 0), c(1, 1)));
        assert!(state.is_legal_move(c(0, 0), c(0, 1)));
        // Missing diagonal.
        assert!(!state.is_legal_move(c(0, 1), c(1, 0)));
        // Occupied destination.
        assert!(!state.is_legal_move(c(0, 1), c(0, 0)));
        // Too far without a goat to jump.
        assert!(!state.is_legal_for(Side::Tiger, c(0, 0), c(0, 2)));
        assert!(!state.is_legal_move(c(0, 0), c(1, 2)));
    }

    #[test]
    fn test_goats_cannot_jump() {
        let goats = [c(1, 1), c(2, 1)];
        let state = GameState::from_layout(&corners(), &goats, Side::Goat, GOAT_COUNT, 0).unwrap();
        assert!(!state.is_legal_move(c(2, 1), c(0, 1)));
        assert!(state
            .legal_moves()
            .iter()
            .all(|mv| !mv.is_capture()));
    }

    #[test]
    fn test_tiger_jump_generates_capture() {
        let state = GameState::from_layout(&corners(), &[c(0, 1)], Side::Tiger, 1, 0).unwrap();
        let jumps: Vec<_> = state
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect();

        assert_eq!(
            jumps,
            vec![Move::Jump {
                from: c(0, 0),
                over: c(0, 1),
                to: c(0, 2)
            }]
        );

        let after = state.apply(jumps[0]);
        assert_eq!(after.captured(), 1);
        assert_eq!(after.at(c(0, 1)), None);
        assert_eq!(after.at(c(0, 2)), Some(Side::Tiger));
        assert_eq!(after.stale_plies(), 0);
    }

    #[test]
    fn test_goat_movement_phase() {
        let goats = [c(2, 2)];
        let state = GameState::from_layout(&corners(), &goats, Side::Goat, GOAT_COUNT, 0).unwrap();
        let moves = state.legal_moves();

        assert_eq!(moves.len(), 8);
        assert!(moves
            .iter()
            .all(|mv| matches!(mv, Move::Step { from, .. } if *from == c(2, 2))));
    }

    #[test]
    fn test_goat_stuck_has_no_moves() {
        // Lone goat in a corner surrounded by tigers.
        let tigers = [c(0, 1), c(1, 0), c(1, 1), c(4, 4)];
        let state = GameState::from_layout(&tigers, &[c(0, 0)], Side::Goat, GOAT_COUNT, 0).unwrap();
        assert!(state.legal_moves().is_empty());
        assert!(!state.has_legal_move());
        assert!(state.successors().is_empty());
    }

    #[test]
    fn test_place_errors() {
        let state = GameState::new();
        assert_eq!(state.place(c(0, 0)), Err(MoveError::Occupied(c(0, 0))));

        let after = state.place(c(2, 2)).unwrap();
        assert_eq!(after.place(c(1, 1)), Err(MoveError::WrongTurn(Side::Tiger)));

        let moving =
            GameState::from_layout(&corners(), &[c(2, 2)], Side::Goat, GOAT_COUNT, 0).unwrap();
        assert_eq!(moving.place(c(1, 1)), Err(MoveError::PlacementOver));
    }

    #[test]
    fn test_move_piece_errors() {
        let state = GameState::new();
        assert_eq!(
            state.move_piece(c(0, 0), c(1, 1)),
            Err(MoveError::NotYourPiece { at: c(0, 0), expected: Side::Goat })
        );

        let placing = GameState::from_layout(&corners(), &[c(2, 2)], Side::Goat, 1, 0).unwrap();
        assert_eq!(
            placing.move_piece(c(2, 2), c(2, 3)),
            Err(MoveError::PlacementPending)
        );

        let tigers_turn = GameState::new().place(c(2, 2)).unwrap();
        assert_eq!(
            tigers_turn.move_piece(c(0, 0), c(2, 0)),
            Err(MoveError::IllegalMove { from: c(0, 0), to: c(2, 0) })
        );
        let moved = tigers_turn.move_piece(c(0, 0), c(1, 0)).unwrap();
        assert_eq!(moved.at(c(1, 0)), Some(Side::Tiger));
        assert!(moved.tigers().contains(&c(1, 0)));
        assert_eq!(moved.to_move(), Side::Goat);
    }

    #[test]
    fn test_move_piece_capture() {
        let state = GameState::from_layout(&corners(), &[c(1, 1)], Side::Tiger, 1, 0).unwrap();
        let after = state.move_piece(c(0, 0), c(2, 2)).unwrap();
        assert_eq!(after.captured(), 1);
        assert_eq!(after.at(c(1, 1)), None);
    }

    #[test]
    fn test_goats_mobile() {
        assert!(!GameState::new().goats_mobile());
        let state =
            GameState::from_layout(&corners(), &[c(2, 2)], Side::Goat, GOAT_COUNT, 0).unwrap();
        assert!(state.goats_mobile());
    }
}
