//! Game state: one immutable Bagh-Chal position.
//!
//! ## GameState
//!
//! - Grid of 25 cells, each empty or holding a goat or a tiger
//! - Side to move
//! - Tiger coordinates (always four), kept in sync with the grid
//! - Goats placed and goats captured
//! - Draw bookkeeping: the repetition window and the stale-ply counter
//!
//! States are values. Transitions (`GameState::apply` and friends in
//! [`crate::rules`]) clone the parent and return a new state; nothing
//! mutates a state once it has been handed out. All fields are fixed-size,
//! so a clone is a flat copy with no heap traffic.

use serde::{Deserialize, Serialize};

use super::config::{
    CAPTURE_LIMIT, CELL_COUNT, GOAT_COUNT, PROGRESS_WINDOW, TIGER_COUNT, TIGER_START,
};
use super::coord::Coord;
use super::error::LayoutError;
use super::key::BoardKey;
use super::progress::ProgressWindow;
use super::side::Side;

/// A complete position, including draw-tracking history.
///
/// Deserialized states are checked the same way as
/// [`GameState::from_layout`] input, plus grid and tiger agreement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct GameState {
    grid: [Option<Side>; CELL_COUNT],
    to_move: Side,
    tigers: [Coord; TIGER_COUNT],
    placed: u8,
    captured: u8,
    progress: ProgressWindow,
    stale_plies: u16,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StateRecord {
    grid: [Option<Side>; CELL_COUNT],
    to_move: Side,
    tigers: [Coord; TIGER_COUNT],
    placed: u8,
    captured: u8,
    progress: ProgressWindow,
    stale_plies: u16,
}

impl TryFrom<StateRecord> for GameState {
    type Error = LayoutError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        if record.placed > GOAT_COUNT {
            return Err(LayoutError::TooManyPlaced(record.placed));
        }
        if record.captured > CAPTURE_LIMIT {
            return Err(LayoutError::TooManyCaptured(record.captured));
        }
        if record.progress.len() > PROGRESS_WINDOW {
            return Err(LayoutError::WindowOverflow(record.progress.len()));
        }

        let mut tiger_cells = 0;
        let mut goat_cells = 0;
        for (coord, piece) in Coord::all().zip(record.grid) {
            match piece {
                Some(Side::Tiger) if !record.tigers.contains(&coord) => {
                    return Err(LayoutError::TigerMismatch(coord));
                }
                Some(Side::Tiger) => tiger_cells += 1,
                Some(Side::Goat) => goat_cells += 1,
                None => {}
            }
        }
        if let Some(&stray) = record
            .tigers
            .iter()
            .find(|&&t| record.grid[t.index()] != Some(Side::Tiger))
        {
            return Err(LayoutError::TigerMismatch(stray));
        }
        if tiger_cells != TIGER_COUNT {
            return Err(LayoutError::TigerCount {
                expected: TIGER_COUNT,
                actual: tiger_cells,
            });
        }
        let available = record.placed.saturating_sub(record.captured) as usize;
        if goat_cells > available {
            return Err(LayoutError::GoatSurplus {
                on_board: goat_cells,
                available,
            });
        }

        Ok(Self {
            grid: record.grid,
            to_move: record.to_move,
            tigers: record.tigers,
            placed: record.placed,
            captured: record.captured,
            progress: record.progress,
            stale_plies: record.stale_plies,
        })
    }
}

impl GameState {
    /// Opening position: tigers in the corners, goats to place.
    #[must_use]
    pub fn new() -> Self {
        let tigers = TIGER_START.map(|(row, col)| Coord::at(row, col));
        let mut grid = [None; CELL_COUNT];
        for tiger in tigers {
            grid[tiger.index()] = Some(Side::Tiger);
        }
        Self::assemble(grid, tigers, Side::Goat, 0, 0)
    }

    /// Build an arbitrary position.
    ///
    /// History starts fresh: the repetition window holds only this position
    /// and the stale-ply counter is zero. Fewer goats than
    /// `placed - captured` may be on the board; more may not.
    pub fn from_layout(
        tigers: &[Coord],
        goats: &[Coord],
        to_move: Side,
        placed: u8,
        captured: u8,
    ) -> Result<Self, LayoutError> {
        if tigers.len() != TIGER_COUNT {
            return Err(LayoutError::TigerCount {
                expected: TIGER_COUNT,
                actual: tigers.len(),
            });
        }
        if placed > GOAT_COUNT {
            return Err(LayoutError::TooManyPlaced(placed));
        }
        if captured > CAPTURE_LIMIT {
            return Err(LayoutError::TooManyCaptured(captured));
        }
        let available = placed.saturating_sub(captured) as usize;
        if goats.len() > available {
            return Err(LayoutError::GoatSurplus {
                on_board: goats.len(),
                available,
            });
        }

        let mut grid = [None; CELL_COUNT];
        let pieces = tigers
            .iter()
            .map(|&c| (c, Side::Tiger))
            .chain(goats.iter().map(|&c| (c, Side::Goat)));
        for (coord, side) in pieces {
            let cell = &mut grid[coord.index()];
            if cell.is_some() {
                return Err(LayoutError::Overlap(coord));
            }
            *cell = Some(side);
        }

        let mut tiger_cells = [Coord::at(0, 0); TIGER_COUNT];
        tiger_cells.copy_from_slice(tigers);
        Ok(Self::assemble(grid, tiger_cells, to_move, placed, captured))
    }

    fn assemble(
        grid: [Option<Side>; CELL_COUNT],
        tigers: [Coord; TIGER_COUNT],
        to_move: Side,
        placed: u8,
        captured: u8,
    ) -> Self {
        let mut state = Self {
            grid,
            to_move,
            tigers,
            placed,
            captured,
            progress: ProgressWindow::new(),
            stale_plies: 0,
        };
        let key = state.key();
        state.progress.record(key);
        state
    }

    // === Queries ===

    /// Piece at a cell.
    #[inline]
    #[must_use]
    pub fn at(&self, coord: Coord) -> Option<Side> {
        self.grid[coord.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.grid[coord.index()].is_none()
    }

    /// Side to move.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Side waiting for its turn.
    #[inline]
    #[must_use]
    pub fn waiting(&self) -> Side {
        self.to_move.opponent()
    }

    /// The four tiger cells.
    #[must_use]
    pub fn tigers(&self) -> &[Coord; TIGER_COUNT] {
        &self.tigers
    }

    /// Goat cells in row-major order.
    pub fn goats(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.grid[c.index()] == Some(Side::Goat))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.grid[c.index()].is_none())
    }

    /// Goats placed so far.
    #[must_use]
    pub fn placed(&self) -> u8 {
        self.placed
    }

    /// Goats captured so far.
    #[must_use]
    pub fn captured(&self) -> u8 {
        self.captured
    }

    /// Goats still to be placed.
    #[must_use]
    pub fn goats_in_hand(&self) -> u8 {
        GOAT_COUNT - self.placed
    }

    /// Whether goats are still in the placement phase.
    #[must_use]
    pub fn in_placement(&self) -> bool {
        self.placed < GOAT_COUNT
    }

    /// Consecutive plies without progress.
    #[must_use]
    pub fn stale_plies(&self) -> u16 {
        self.stale_plies
    }

    /// Repetition window.
    #[must_use]
    pub fn progress(&self) -> &ProgressWindow {
        &self.progress
    }

    /// Canonical key of the grid.
    #[must_use]
    pub fn key(&self) -> BoardKey {
        BoardKey::from_grid(&self.grid)
    }

    // === Transition helpers (used by the rules engine) ===

    pub(crate) fn set(&mut self, coord: Coord, piece: Option<Side>) {
        self.grid[coord.index()] = piece;
    }

    /// Move the tiger standing on `from` to `to`, keeping `tigers` in order.
    pub(crate) fn relocate_tiger(&mut self, from: Coord, to: Coord) {
        if let Some(slot) = self.tigers.iter_mut().find(|t| **t == from) {
            *slot = to;
        }
        self.set(from, None);
        self.set(to, Some(Side::Tiger));
    }

    pub(crate) fn record_placement(&mut self) {
        self.placed += 1;
    }

    pub(crate) fn record_capture(&mut self) {
        self.captured += 1;
    }

    /// Close a ply: hand the turn over and update draw bookkeeping.
    pub(crate) fn finish_ply(&mut self, progress: bool) {
        self.to_move = self.to_move.opponent();
        self.stale_plies = if progress {
            0
        } else {
            self.stale_plies.saturating_add(1)
        };
        let key = self.key();
        self.progress.record(key);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> Vec<Coord> {
        TIGER_START.iter().map(|&(r, c)| Coord::at(r, c)).collect()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.to_move(), Side::Goat);
        assert_eq!(state.waiting(), Side::Tiger);
        assert_eq!(state.placed(), 0);
        assert_eq!(state.captured(), 0);
        assert_eq!(state.goats_in_hand(), GOAT_COUNT);
        assert!(state.in_placement());
        assert_eq!(state.goats().count(), 0);
        assert_eq!(state.empty_cells().count(), CELL_COUNT - TIGER_COUNT);
        for tiger in state.tigers() {
            assert_eq!(state.at(*tiger), Some(Side::Tiger));
        }
        assert_eq!(state.progress().count(state.key()), 1);
    }

    #[test]
    fn test_from_layout() {
        let goats = [Coord::at(2, 2), Coord::at(1, 1)];
        let state = GameState::from_layout(&corners(), &goats, Side::Tiger, 5, 1).unwrap();

        assert_eq!(state.to_move(), Side::Tiger);
        assert_eq!(state.at(Coord::at(2, 2)), Some(Side::Goat));
        assert_eq!(state.goats().count(), 2);
        assert_eq!(state.captured(), 1);
        assert_eq!(state.stale_plies(), 0);
    }

    #[test]
    fn test_from_layout_rejects_bad_input() {
        let three = &corners()[..3];
        assert_eq!(
            GameState::from_layout(three, &[], Side::Goat, 0, 0),
            Err(LayoutError::TigerCount { expected: 4, actual: 3 })
        );

        let overlap = [Coord::at(0, 0)];
        assert_eq!(
            GameState::from_layout(&corners(), &overlap, Side::Goat, 1, 0),
            Err(LayoutError::Overlap(Coord::at(0, 0)))
        );

        assert!(matches!(
            GameState::from_layout(&corners(), &[], Side::Goat, 21, 0),
            Err(LayoutError::TooManyPlaced(21))
        ));
        assert!(matches!(
            GameState::from_layout(&corners(), &[], Side::Goat, 20, 6),
            Err(LayoutError::TooManyCaptured(6))
        ));
        assert!(matches!(
            GameState::from_layout(&corners(), &[Coord::at(2, 2)], Side::Goat, 0, 0),
            Err(LayoutError::GoatSurplus { .. })
        ));
    }

    #[test]
    fn test_relocate_tiger_keeps_sync() {
        let mut state = GameState::new();
        state.relocate_tiger(Coord::at(0, 0), Coord::at(1, 1));

        assert_eq!(state.at(Coord::at(0, 0)), None);
        assert_eq!(state.at(Coord::at(1, 1)), Some(Side::Tiger));
        assert_eq!(state.tigers()[0], Coord::at(1, 1));
    }

    #[test]
    fn test_finish_ply_swaps_turn_and_counts() {
        let mut state = GameState::new();
        state.finish_ply(false);
        assert_eq!(state.to_move(), Side::Tiger);
        assert_eq!(state.stale_plies(), 1);
        // Same grid recorded again.
        assert_eq!(state.progress().count(state.key()), 2);

        state.finish_ply(true);
        assert_eq!(state.to_move(), Side::Goat);
        assert_eq!(state.stale_plies(), 0);
    }

    #[test]
    fn test_serialization() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_state() {
        let state = GameState::from_layout(&corners(), &[Coord::at(2, 2)], Side::Tiger, 3, 0)
            .unwrap();
        let good = serde_json::to_value(&state).unwrap();

        // Tiger list pointing at a goat.
        let mut bad = good.clone();
        bad["tigers"][0] = serde_json::json!({ "row": 2, "col": 2 });
        let err = serde_json::from_value::<GameState>(bad).unwrap_err();
        assert!(err.to_string().contains("tiger"), "{err}");

        // Extra tiger on the grid.
        let mut bad = good.clone();
        bad["grid"][12] = serde_json::json!("Tiger");
        assert!(serde_json::from_value::<GameState>(bad).is_err());

        // Goats beyond what was placed.
        let mut bad = good.clone();
        bad["placed"] = serde_json::json!(0);
        assert!(serde_json::from_value::<GameState>(bad).is_err());

        let mut bad = good;
        bad["captured"] = serde_json::json!(9);
        assert!(serde_json::from_value::<GameState>(bad).is_err());
    }

    #[test]
    fn test_deserialize_rejects_off_board_tiger() {
        let mut value = serde_json::to_value(GameState::new()).unwrap();
        value["tigers"][3] = serde_json::json!({ "row": 9, "col": 9 });
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }
}
