//! # royale-engine: Coin-Toss Battle Royale Solver
//!
//! Exact win probabilities for a "last player standing" game played around a
//! circle. Each player holds a biased coin; on their turn a player flips it and,
//! on success, eliminates the rival who most endangers their next turn. Play
//! passes clockwise until one player remains.
//!
//! The same arrangement can repeat any number of times before someone
//! succeeds, so the solver sums those laps as a geometric series and recurses
//! over the strictly smaller arrangements left after each elimination.
//!
//! ## Core Modules
//!
//! - [`player`] - Seat identifiers and the validated coin table
//! - [`cycle`] - One circular arrangement: survival odds, threats, outbound flow
//! - [`solver`] - Recursive decomposition down to single survivors
//! - [`fairness`] - Skill ranking versus win ranking
//! - [`montecarlo`] - Seeded turn-by-turn simulation used as a cross-check
//! - [`report`] - Serializable summary of a solved game
//! - [`errors`] - Error types for invalid or degenerate games
//!
//! ## Quick Start
//!
//! ```rust
//! use royale_engine::{fairness, solve_game};
//! use royale_engine::player::PlayerId;
//!
//! let coins = [0.25, 0.5, 1.0];
//! let wins = solve_game(&coins).unwrap();
//!
//! // The sure shot draws everyone's fire and ends up last.
//! assert!(wins[&PlayerId(2)] < wins[&PlayerId(0)]);
//! assert!(!fairness(&coins, &wins).unwrap());
//! ```
//!
//! ## Heads-Up Closed Form
//!
//! With two players the first to act wins with `a / (1 - (1 - a)(1 - b))`:
//!
//! ```rust
//! use royale_engine::solve_game;
//! use royale_engine::player::PlayerId;
//!
//! let (a, b) = (0.3, 0.6);
//! let wins = solve_game(&[a, b]).unwrap();
//! let expected = a / (1.0 - (1.0 - a) * (1.0 - b));
//! assert!((wins[&PlayerId(0)] - expected).abs() < 1e-12);
//! ```

pub mod cycle;
pub mod errors;
pub mod fairness;
pub mod montecarlo;
pub mod player;
pub mod report;
pub mod solver;

pub use crate::cycle::CycleModel;
pub use crate::errors::SolverError;
pub use crate::fairness::{fairness, FairnessRanking};
pub use crate::montecarlo::{simulate, MonteCarloEstimate};
pub use crate::player::{Coins, PlayerId};
pub use crate::report::GameReport;
pub use crate::solver::{solve_game, GameSolver, SolveStats, WinProbabilities};
