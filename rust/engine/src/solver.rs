use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cycle::CycleModel;
use crate::errors::SolverError;
use crate::player::{Coins, PlayerId};

/// Win probability per player, ordered by seat.
pub type WinProbabilities = BTreeMap<PlayerId, f64>;

/// Counters collected while decomposing a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Cycle models visited, the root included
    pub cycles_solved: usize,
    /// Visited cycles already down to a single player
    pub terminal_cycles: usize,
    /// Deepest recursion level reached (root is 0)
    pub max_depth: usize,
}

/// Recursive decomposition of a cycle into the smaller cycles reachable after
/// one elimination, down to single survivors.
#[derive(Debug, Default)]
pub struct GameSolver {
    stats: SolveStats,
}

impl GameSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn solve(&mut self, cycle: &CycleModel<'_>) -> Result<WinProbabilities, SolverError> {
        self.solve_at(cycle, 0)
    }

    fn solve_at(
        &mut self,
        cycle: &CycleModel<'_>,
        depth: usize,
    ) -> Result<WinProbabilities, SolverError> {
        self.stats.cycles_solved += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if let Some(victor) = cycle.victor() {
            self.stats.terminal_cycles += 1;
            return Ok(BTreeMap::from([(victor, cycle.inbound_prob()[0])]));
        }

        let children = child_cycles(cycle)?;
        debug!(
            depth,
            size = cycle.size(),
            inbound = cycle.total_inbound(),
            children = children.len(),
            "decomposing cycle"
        );

        let mut sums = WinProbabilities::new();
        for child in &children {
            for (player, prob) in self.solve_at(child, depth + 1)? {
                *sums.entry(player).or_insert(0.0) += prob;
            }
        }
        Ok(sums)
    }
}

/// Cycles entered after the next elimination, one per distinct surviving set.
///
/// Arrangements that leave the same players are merged. The sorted player set
/// is only the grouping key: the child keeps the surviving circle order,
/// rotated to start at its lowest seat, and receives at each player's
/// position the flow of every arrangement that resumes play with that player.
/// Sets reached with zero probability are dropped.
pub fn child_cycles<'a>(cycle: &CycleModel<'a>) -> Result<Vec<CycleModel<'a>>, SolverError> {
    let mut groups: BTreeMap<Vec<PlayerId>, Vec<(Vec<PlayerId>, f64)>> = BTreeMap::new();
    for (arrangement, prob) in cycle.outbound_flows()? {
        let mut key = arrangement.clone();
        key.sort();
        groups.entry(key).or_default().push((arrangement, prob));
    }

    let mut children = Vec::with_capacity(groups.len());
    for (key, members) in groups {
        let Some((circle, _)) = members.first() else {
            continue;
        };
        let players = rotate_to_lowest(circle);
        let inbound: Vec<f64> = players
            .iter()
            .map(|&player| {
                members
                    .iter()
                    .filter(|(arrangement, _)| arrangement.first() == Some(&player))
                    .map(|(_, prob)| *prob)
                    .sum::<f64>()
            })
            .collect();
        if inbound.iter().all(|p| *p == 0.0) {
            trace!(?key, "skipping unreachable cycle");
            continue;
        }
        children.push(CycleModel::new(players, inbound, cycle.coins())?);
    }
    Ok(children)
}

/// Same circle, starting from its lowest seat.
fn rotate_to_lowest(circle: &[PlayerId]) -> Vec<PlayerId> {
    let start = circle
        .iter()
        .enumerate()
        .min_by_key(|(_, player)| **player)
        .map_or(0, |(idx, _)| idx);
    let mut players = circle.to_vec();
    players.rotate_left(start);
    players
}

/// Solves a validated coin table with seat 0 acting first.
///
/// Every declared player appears in the result, with `0.0` when no branch of
/// the game ends with them as victor.
pub fn solve_coins(coins: &Coins) -> Result<(WinProbabilities, SolveStats), SolverError> {
    let root = CycleModel::root(coins)?;
    let mut solver = GameSolver::new();
    let victors = solver.solve(&root)?;

    let mut wins: WinProbabilities = coins.players().map(|p| (p, 0.0)).collect();
    for (player, prob) in victors {
        *wins.entry(player).or_insert(0.0) += prob;
    }

    let stats = solver.stats();
    info!(
        players = coins.len(),
        cycles = stats.cycles_solved,
        depth = stats.max_depth,
        "game solved"
    );
    Ok((wins, stats))
}

/// Exact win probability of every player for the given seat-ordered coins.
///
/// # Examples
///
/// ```
/// use royale_engine::player::PlayerId;
/// use royale_engine::solver::solve_game;
///
/// let wins = solve_game(&[0.25, 0.5, 1.0]).unwrap();
/// assert!((wins[&PlayerId(1)] - 0.425).abs() < 1e-12);
///
/// let total: f64 = wins.values().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
pub fn solve_game(coins: &[f64]) -> Result<WinProbabilities, SolverError> {
    let coins = Coins::try_from(coins)?;
    solve_coins(&coins).map(|(wins, _)| wins)
}
