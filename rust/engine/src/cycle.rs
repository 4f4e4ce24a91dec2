use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::errors::SolverError;
use crate::player::{Coins, PlayerId};

/// Slack allowed on the inbound mass of a cycle.
/// Merged child mass can overshoot 1.0 by a few ulps.
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// One circular arrangement of surviving players, entered at each position
/// with the probability mass in `inbound_prob`.
///
/// Position `i` in `inbound_prob` means "the player at `players[i]` acts
/// first". Derived quantities are computed on first request and cached for
/// the lifetime of the model; recomputation would yield the same values.
///
/// # Examples
///
/// ```
/// use royale_engine::cycle::CycleModel;
/// use royale_engine::player::{Coins, PlayerId};
///
/// let coins = Coins::new(vec![0.5, 0.5]).unwrap();
/// let cycle = CycleModel::root(&coins).unwrap();
///
/// // Each lap fails with probability 0.25, so 4/3 laps are expected.
/// let m = cycle.infinite_multiplier().unwrap();
/// assert!((m - 4.0 / 3.0).abs() < 1e-12);
///
/// let threats = cycle.player_threats().unwrap();
/// assert_eq!(threats[&PlayerId(0)], PlayerId(1));
/// ```
#[derive(Debug)]
pub struct CycleModel<'a> {
    players: Vec<PlayerId>,
    inbound_prob: Vec<f64>,
    coins: &'a Coins,
    in_cycle_prob: OnceCell<Vec<f64>>,
    infinite_multiplier: OnceCell<f64>,
    threats: OnceCell<Vec<PlayerId>>,
    outbound_prob: OnceCell<Vec<f64>>,
}

impl<'a> CycleModel<'a> {
    pub fn new(
        players: Vec<PlayerId>,
        inbound_prob: Vec<f64>,
        coins: &'a Coins,
    ) -> Result<Self, SolverError> {
        if players.is_empty() {
            return Err(SolverError::invalid("cycle has no players"));
        }
        if players.len() != inbound_prob.len() {
            return Err(SolverError::invalid(format!(
                "{} players but {} inbound probabilities",
                players.len(),
                inbound_prob.len()
            )));
        }
        let mut seen = BTreeSet::new();
        for &player in &players {
            if !seen.insert(player) {
                return Err(SolverError::invalid(format!(
                    "player {} appears twice in the cycle",
                    player
                )));
            }
            if coins.get(player).is_none() {
                return Err(SolverError::invalid(format!(
                    "player {} has no coin",
                    player
                )));
            }
        }
        if let Some(p) = inbound_prob.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(SolverError::invalid(format!(
                "inbound probability {} is not a valid probability mass",
                p
            )));
        }
        let total: f64 = inbound_prob.iter().sum();
        if total > 1.0 + PROBABILITY_EPSILON {
            return Err(SolverError::invalid(format!(
                "inbound probabilities must sum to <= 1.0, got {}",
                total
            )));
        }

        Ok(Self {
            players,
            inbound_prob,
            coins,
            in_cycle_prob: OnceCell::new(),
            infinite_multiplier: OnceCell::new(),
            threats: OnceCell::new(),
            outbound_prob: OnceCell::new(),
        })
    }

    /// Full table in seat order with all mass on seat 0, who acts first.
    pub fn root(coins: &'a Coins) -> Result<Self, SolverError> {
        let players: Vec<PlayerId> = coins.players().collect();
        let mut inbound = vec![0.0; players.len()];
        inbound[0] = 1.0;
        Self::new(players, inbound, coins)
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn inbound_prob(&self) -> &[f64] {
        &self.inbound_prob
    }

    pub fn total_inbound(&self) -> f64 {
        self.inbound_prob.iter().sum()
    }

    pub fn coins(&self) -> &'a Coins {
        self.coins
    }

    /// The sole survivor, once the cycle is down to one player.
    pub fn victor(&self) -> Option<PlayerId> {
        match self.players.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Per-position probability that the turn fails.
    pub fn in_cycle_prob(&self) -> &[f64] {
        self.in_cycle_prob.get_or_init(|| {
            self.players
                .iter()
                .map(|&p| 1.0 - self.coins.get(p).unwrap_or(0.0))
                .collect()
        })
    }

    /// Sum of the geometric series of laps in which every turn fails.
    pub fn infinite_multiplier(&self) -> Result<f64, SolverError> {
        if let Some(m) = self.infinite_multiplier.get() {
            return Ok(*m);
        }
        // 1 - prod(1 - coin) in log space, so tiny coins do not round to a
        // lap that always fails.
        let log_lap: f64 = self
            .players
            .iter()
            .map(|&p| (-self.coins.get(p).unwrap_or(0.0)).ln_1p())
            .sum();
        let lap_success = -log_lap.exp_m1();
        if lap_success <= 0.0 {
            return Err(SolverError::NonTerminatingGame {
                players: self.players.clone(),
            });
        }
        let m = 1.0 / lap_success;
        Ok(*self.infinite_multiplier.get_or_init(|| m))
    }

    fn ensure_contested(&self) -> Result<(), SolverError> {
        match self.victor() {
            Some(victor) => Err(SolverError::TerminalCycle { victor }),
            None => Ok(()),
        }
    }

    fn threats_by_position(&self) -> &[PlayerId] {
        self.threats.get_or_init(|| {
            let in_cycle = self.in_cycle_prob();
            let n = self.size();
            (0..n)
                .map(|position| {
                    let offset = biggest_threat_offset(in_cycle, position);
                    let target = self.players[(position + offset) % n];
                    trace!(
                        player = %self.players[position],
                        target = %target,
                        offset,
                        "threat selected"
                    );
                    target
                })
                .collect()
        })
    }

    /// Rival each player removes upon succeeding.
    pub fn player_threats(&self) -> Result<BTreeMap<PlayerId, PlayerId>, SolverError> {
        self.ensure_contested()?;
        Ok(self
            .players
            .iter()
            .copied()
            .zip(self.threats_by_position().iter().copied())
            .collect())
    }

    /// Probability that play entering this cycle ends with the player at
    /// position `j` making the next elimination, for every `j`.
    pub fn outbound_prob(&self) -> Result<&[f64], SolverError> {
        self.ensure_contested()?;
        if let Some(flow) = self.outbound_prob.get() {
            return Ok(flow);
        }
        let multiplier = self.infinite_multiplier()?;
        let in_cycle = self.in_cycle_prob();
        let n = self.size();
        let flow: Vec<f64> = (0..n)
            .map(|j| {
                let coin = self.coins.get(self.players[j]).unwrap_or(0.0);
                (0..n)
                    .map(|i| {
                        // Positions i, i+1, .., j-1 all fail before j succeeds.
                        let i2j: f64 = (0..(n + j - i) % n)
                            .map(|k| in_cycle[(i + k) % n])
                            .product();
                        self.inbound_prob[i] * i2j * coin * multiplier
                    })
                    .sum::<f64>()
            })
            .collect();
        Ok(self.outbound_prob.get_or_init(|| flow))
    }

    /// Circle left behind when the player at each position succeeds: play
    /// resumes with the next player and the threat is gone.
    pub fn outbound_arrangements(&self) -> Result<Vec<Vec<PlayerId>>, SolverError> {
        self.ensure_contested()?;
        let threats = self.threats_by_position();
        let n = self.size();
        Ok((0..n)
            .map(|position| {
                let threat = threats[position];
                (1..=n)
                    .map(|k| self.players[(position + k) % n])
                    .filter(|&p| p != threat)
                    .collect()
            })
            .collect())
    }

    /// Arrangements paired with the probability of reaching them.
    pub fn outbound_flows(&self) -> Result<Vec<(Vec<PlayerId>, f64)>, SolverError> {
        let arrangements = self.outbound_arrangements()?;
        let flow = self.outbound_prob()?;
        Ok(arrangements.into_iter().zip(flow.iter().copied()).collect())
    }
}

/// Probability that every rival other than the one at `offset` fails before
/// the player at `position` regains the turn.
///
/// Factors are multiplied in ascending order so equal multisets of rivals
/// yield bit-identical weights.
pub fn survival_weight(in_cycle: &[f64], position: usize, offset: usize) -> f64 {
    let n = in_cycle.len();
    let mut factors: Vec<f64> = (1..n)
        .filter(|&k| k != offset)
        .map(|k| in_cycle[(position + k) % n])
        .collect();
    factors.sort_by(f64::total_cmp);
    factors.into_iter().product()
}

/// Forward offset (in `1..n`) of the rival the player at `position` removes.
/// Highest survival weight wins; the nearest rival wins exact ties.
///
/// Callers guarantee at least two players.
pub fn biggest_threat_offset(in_cycle: &[f64], position: usize) -> usize {
    let mut best = 1;
    let mut best_weight = survival_weight(in_cycle, position, 1);
    for offset in 2..in_cycle.len() {
        let weight = survival_weight(in_cycle, position, offset);
        if weight > best_weight {
            best = offset;
            best_weight = weight;
        }
    }
    best
}
