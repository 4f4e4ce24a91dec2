use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SolverError;
use crate::player::{Coins, PlayerId};

/// 1-based rank of every score, in input order, within the ascending sort of
/// all scores. Equal scores keep their input order.
///
/// ```
/// use royale_engine::fairness::rank_order;
///
/// assert_eq!(rank_order(&[0.3, 0.1, 0.2]), vec![3, 1, 2]);
/// assert_eq!(rank_order(&[0.5, 0.5]), vec![1, 2]);
/// ```
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..scores.len()).collect();
    sorted.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    let mut ranks = vec![0; scores.len()];
    for (rank, index) in sorted.into_iter().enumerate() {
        ranks[index] = rank + 1;
    }
    ranks
}

/// Compares the skill ordering of players with their win ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessRanking {
    players: Vec<PlayerId>,
    skill_ranks: Vec<usize>,
    win_ranks: Vec<usize>,
}

impl FairnessRanking {
    /// Both tables must cover the same players.
    pub fn new(
        skill: &BTreeMap<PlayerId, f64>,
        wins: &BTreeMap<PlayerId, f64>,
    ) -> Result<Self, SolverError> {
        if !skill.keys().eq(wins.keys()) {
            return Err(SolverError::invalid(
                "skill and win tables list different players",
            ));
        }
        let players: Vec<PlayerId> = skill.keys().copied().collect();
        let skill_scores: Vec<f64> = skill.values().copied().collect();
        let win_scores: Vec<f64> = wins.values().copied().collect();
        Ok(Self {
            players,
            skill_ranks: rank_order(&skill_scores),
            win_ranks: rank_order(&win_scores),
        })
    }

    pub fn from_game(coins: &Coins, wins: &BTreeMap<PlayerId, f64>) -> Result<Self, SolverError> {
        let skill: BTreeMap<PlayerId, f64> = coins.iter().collect();
        Self::new(&skill, wins)
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn skill_ranks(&self) -> &[usize] {
        &self.skill_ranks
    }

    pub fn win_ranks(&self) -> &[usize] {
        &self.win_ranks
    }

    /// True when stronger coins always translate into better odds.
    pub fn is_fair(&self) -> bool {
        self.skill_ranks == self.win_ranks
    }
}

/// Whether the win ordering of a solved game matches its coin ordering.
pub fn fairness(coins: &[f64], wins: &BTreeMap<PlayerId, f64>) -> Result<bool, SolverError> {
    let coins = Coins::try_from(coins)?;
    FairnessRanking::from_game(&coins, wins).map(|ranking| ranking.is_fair())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[f64]) -> BTreeMap<PlayerId, f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i), *v))
            .collect()
    }

    #[test]
    fn identical_orderings_are_fair() {
        let ranking =
            FairnessRanking::new(&table(&[0.3, 0.6]), &table(&[0.41, 0.59])).unwrap();
        assert_eq!(ranking.skill_ranks(), &[1, 2]);
        assert!(ranking.is_fair());
    }

    #[test]
    fn reordered_winners_are_unfair() {
        let ranking = FairnessRanking::new(
            &table(&[0.25, 0.5, 1.0]),
            &table(&[0.29375, 0.425, 0.28125]),
        )
        .unwrap();
        assert_eq!(ranking.skill_ranks(), &[1, 2, 3]);
        assert_eq!(ranking.win_ranks(), &[2, 3, 1]);
        assert!(!ranking.is_fair());
    }

    #[test]
    fn mismatched_players_are_rejected() {
        let r = FairnessRanking::new(&table(&[0.1, 0.2]), &table(&[1.0]));
        assert!(r.is_err());
    }

    #[test]
    fn ties_keep_declared_order() {
        assert_eq!(rank_order(&[0.2, 0.1, 0.2, 0.1]), vec![3, 1, 4, 2]);
    }
}
