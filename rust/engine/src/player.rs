use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SolverError;

/// Seat index of a player around the circle.
/// Seat order is the circle order, so sorting seats recovers the arrangement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only table of per-turn success probabilities, indexed by seat.
/// Every value is validated to lie in `[0, 1]` at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Coins {
    probs: Vec<f64>,
}

impl Coins {
    pub fn new(probs: Vec<f64>) -> Result<Self, SolverError> {
        if probs.is_empty() {
            return Err(SolverError::invalid("at least one player is required"));
        }
        if let Some((seat, p)) = probs
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(SolverError::invalid(format!(
                "coin for player {} is {}, expected a probability in [0, 1]",
                seat, p
            )));
        }
        Ok(Self { probs })
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Success probability for `player`, or `None` for an undeclared seat.
    pub fn get(&self, player: PlayerId) -> Option<f64> {
        self.probs.get(player.0).copied()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.probs.len()).map(PlayerId)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Players paired with their coin, in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, f64)> + '_ {
        self.probs.iter().enumerate().map(|(i, p)| (PlayerId(i), *p))
    }
}

impl TryFrom<&[f64]> for Coins {
    type Error = SolverError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Coins::new(value.to_vec())
    }
}
