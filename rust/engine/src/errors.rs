use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("Game never terminates: every coin among {players:?} is zero")]
    NonTerminatingGame { players: Vec<PlayerId> },
    #[error("Cycle already decided in favour of player {victor}")]
    TerminalCycle { victor: PlayerId },
    #[error("Monte Carlo estimate needs at least one trial")]
    InvalidTrials,
}

impl SolverError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SolverError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
