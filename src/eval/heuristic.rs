//! Weighted positional heuristic.
//!
//! ```text
//! raw =  tigers      * surviving tigers
//!      + captures    * goats captured
//!      + mobility    * tiger moves (a capture counts twice)
//!      - cluster     * connected goat pairs
//!      - goats       * goats still in play (20 - captured)
//!      - distance    * sum over tigers of the distance to the nearest goat
//! ```
//!
//! `raw` measures how well the tigers are doing, so the reported score is
//! `-raw`.

use serde::{Deserialize, Serialize};

use crate::core::config::{GOAT_COUNT, TIGER_COUNT};
use crate::core::lattice::{candidate_targets, neighbours};
use crate::core::{GameState, Side};

/// Term weights for [`evaluate_with`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    pub tigers: f64,
    pub captures: f64,
    pub mobility: f64,
    pub cluster: f64,
    pub goats: f64,
    pub distance: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            tigers: 10.0,
            captures: 40.0,
            mobility: 10.0,
            cluster: 30.0,
            goats: 10.0,
            distance: 10.0,
        }
    }
}

/// Score `state` with the default weights.
#[must_use]
pub fn evaluate(state: &GameState) -> f64 {
    evaluate_with(state, &HeuristicWeights::default())
}

/// Score `state` from the goats' point of view.
#[must_use]
pub fn evaluate_with(state: &GameState, w: &HeuristicWeights) -> f64 {
    let goats_left = GOAT_COUNT - state.captured();
    let raw = w.tigers * TIGER_COUNT as f64
        + w.captures * f64::from(state.captured())
        + w.mobility * f64::from(tiger_mobility(state))
        - w.cluster * f64::from(goat_cluster(state))
        - w.goats * f64::from(goats_left)
        - w.distance * f64::from(tiger_goat_distance(state));
    -raw
}

/// Legal tiger moves, with captures counted twice.
#[must_use]
pub fn tiger_mobility(state: &GameState) -> u32 {
    state
        .tigers()
        .iter()
        .flat_map(|&from| candidate_targets(from).map(move |to| (from, to)))
        .filter(|&(from, to)| state.is_legal_for(Side::Tiger, from, to))
        .map(|(from, to)| if state.capture_over(from, to).is_some() { 2 } else { 1 })
        .sum()
}

/// Unordered pairs of goats joined by a line.
#[must_use]
pub fn goat_cluster(state: &GameState) -> u32 {
    state
        .goats()
        .map(|goat| {
            neighbours(goat)
                .filter(|&n| n.index() > goat.index() && state.at(n) == Some(Side::Goat))
                .count() as u32
        })
        .sum()
}

/// Sum over tigers of the king-move distance to the closest goat.
///
/// Zero when no goat is on the board.
#[must_use]
pub fn tiger_goat_distance(state: &GameState) -> u32 {
    state
        .tigers()
        .iter()
        .map(|&tiger| {
            state
                .goats()
                .map(|goat| u32::from(tiger.chebyshev(goat)))
                .min()
                .unwrap_or(0)
        })
        .sum()
}
