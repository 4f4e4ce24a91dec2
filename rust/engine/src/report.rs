use serde::{Deserialize, Serialize};

use crate::errors::SolverError;
use crate::fairness::FairnessRanking;
use crate::montecarlo::MonteCarloEstimate;
use crate::player::{Coins, PlayerId};
use crate::solver::{solve_coins, SolveStats};

/// Monte Carlo agreement attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub trials: u64,
    pub seed: u64,
    /// Estimated win frequency, indexed by seat
    pub frequencies: Vec<f64>,
    pub max_deviation: f64,
    pub tolerance: f64,
    pub within_tolerance: bool,
}

/// Complete outcome of one game, serialized as one JSONL record in batch mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    /// Per-turn success probability, indexed by seat
    pub coins: Vec<f64>,
    /// Exact win probability, indexed by seat
    pub win_probabilities: Vec<f64>,
    /// 1-based rank of each seat by coin strength
    pub skill_ranks: Vec<usize>,
    /// 1-based rank of each seat by win probability
    pub win_ranks: Vec<usize>,
    pub fair: bool,
    pub stats: SolveStats,
    #[serde(default)]
    pub cross_check: Option<CrossCheck>,
}

impl GameReport {
    pub fn solve(coins: &[f64]) -> Result<Self, SolverError> {
        let table = Coins::try_from(coins)?;
        let (wins, stats) = solve_coins(&table)?;
        let ranking = FairnessRanking::from_game(&table, &wins)?;
        Ok(Self {
            coins: coins.to_vec(),
            win_probabilities: wins.values().copied().collect(),
            skill_ranks: ranking.skill_ranks().to_vec(),
            win_ranks: ranking.win_ranks().to_vec(),
            fair: ranking.is_fair(),
            stats,
            cross_check: None,
        })
    }

    /// Attaches a Monte Carlo estimate compared against the exact result.
    pub fn with_cross_check(mut self, estimate: &MonteCarloEstimate, tolerance: f64) -> Self {
        let exact = self
            .win_probabilities
            .iter()
            .enumerate()
            .map(|(seat, p)| (PlayerId(seat), *p))
            .collect();
        let max_deviation = estimate.max_deviation(&exact);
        self.cross_check = Some(CrossCheck {
            trials: estimate.trials,
            seed: estimate.seed,
            frequencies: estimate.frequencies().into_values().collect(),
            max_deviation,
            tolerance,
            within_tolerance: max_deviation <= tolerance,
        });
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
