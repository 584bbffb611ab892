//! Counters gathered while a search runs.

use serde::{Deserialize, Serialize};

/// Per-search counters, reset at the start of every search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed select/expand/simulate/backpropagate rounds.
    pub iterations: u32,

    /// Nodes added to the tree.
    pub nodes_expanded: u32,

    /// Rollouts run.
    pub simulations: u32,

    /// Rounds whose descent stopped on an already decided position.
    pub terminal_hits: u32,

    /// Deepest node created, in plies below the root.
    pub max_depth: u16,

    /// Wall time of the search in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        self.per_second(self.iterations)
    }

    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        self.per_second(self.simulations)
    }

    /// Fraction of iterations that grew the tree.
    ///
    /// Drops below 1.0 once selection keeps landing on decided positions.
    #[must_use]
    pub fn expansion_rate(&self) -> f64 {
        match self.iterations {
            0 => 0.0,
            n => f64::from(self.nodes_expanded) / f64::from(n),
        }
    }

    fn per_second(&self, count: u32) -> f64 {
        match self.time_us {
            0 => 0.0,
            us => f64::from(count) * 1_000_000.0 / us as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_report_zero_rates() {
        let stats = SearchStats::new();
        assert_eq!(stats.iterations_per_second(), 0.0);
        assert_eq!(stats.simulations_per_second(), 0.0);
        assert_eq!(stats.expansion_rate(), 0.0);
    }

    #[test]
    fn test_rates() {
        let stats = SearchStats {
            iterations: 1000,
            simulations: 500,
            nodes_expanded: 400,
            time_us: 500_000,
            ..SearchStats::default()
        };

        assert_eq!(stats.iterations_per_second(), 2000.0);
        assert_eq!(stats.simulations_per_second(), 1000.0);
        assert_eq!(stats.expansion_rate(), 0.4);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats {
            iterations: 100,
            terminal_hits: 50,
            max_depth: 9,
            ..SearchStats::default()
        };

        stats.reset();

        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.terminal_hits, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_json_shape() {
        let stats = SearchStats {
            iterations: 42,
            ..SearchStats::default()
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["iterations"], 42);
        assert_eq!(json["terminal_hits"], 0);
    }
}
