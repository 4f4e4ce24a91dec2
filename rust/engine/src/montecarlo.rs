use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cycle::biggest_threat_offset;
use crate::errors::SolverError;
use crate::player::{Coins, PlayerId};
use crate::solver::WinProbabilities;

/// Plays games turn by turn with a seeded ChaCha20 stream.
/// Same seed, same sequence of winners.
#[derive(Debug)]
pub struct BattleSimulator {
    coins: Coins,
    rng: ChaCha20Rng,
}

impl BattleSimulator {
    pub fn new_with_seed(coins: Coins, seed: u64) -> Result<Self, SolverError> {
        if coins.len() > 1 && coins.as_slice().iter().all(|p| *p == 0.0) {
            return Err(SolverError::NonTerminatingGame {
                players: coins.players().collect(),
            });
        }
        Ok(Self {
            coins,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    fn coin(&self, player: PlayerId) -> f64 {
        self.coins.get(player).unwrap_or(0.0)
    }

    /// Plays one game from seat 0 and returns the last player standing.
    pub fn play_game(&mut self) -> PlayerId {
        let mut circle: Vec<PlayerId> = self.coins.players().collect();
        while circle.len() > 1 {
            let roll: f64 = self.rng.random();
            if roll < self.coin(circle[0]) {
                let in_cycle: Vec<f64> = circle.iter().map(|&p| 1.0 - self.coin(p)).collect();
                circle.remove(biggest_threat_offset(&in_cycle, 0));
            }
            if circle.len() > 1 {
                circle.rotate_left(1);
            }
        }
        circle[0]
    }
}

/// Win counts from a batch of simulated games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloEstimate {
    pub trials: u64,
    pub seed: u64,
    /// Games won, indexed by seat
    pub wins: Vec<u64>,
}

impl MonteCarloEstimate {
    pub fn frequencies(&self) -> WinProbabilities {
        self.wins
            .iter()
            .enumerate()
            .map(|(seat, &won)| (PlayerId(seat), won as f64 / self.trials as f64))
            .collect()
    }

    /// Largest absolute gap between the estimate and `exact` over all players.
    pub fn max_deviation(&self, exact: &WinProbabilities) -> f64 {
        self.frequencies()
            .iter()
            .map(|(player, freq)| (freq - exact.get(player).copied().unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }
}

/// Estimates win probabilities by playing `trials` games.
pub fn simulate(coins: &[f64], trials: u64, seed: u64) -> Result<MonteCarloEstimate, SolverError> {
    if trials == 0 {
        return Err(SolverError::InvalidTrials);
    }
    let coins = Coins::try_from(coins)?;
    let mut wins = vec![0u64; coins.len()];
    let mut sim = BattleSimulator::new_with_seed(coins, seed)?;
    for _ in 0..trials {
        wins[sim.play_game().index()] += 1;
    }
    info!(trials, seed, "simulation finished");
    Ok(MonteCarloEstimate { trials, seed, wins })
}
