//! Engine error types.
//!
//! Every failure is a caller contract violation; nothing here is transient
//! and nothing is retried.

use thiserror::Error;

use super::action::Action;
use super::color::Color;
use super::player::PlayerId;

/// Why a score sheet refused an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalReason {
    #[error("action is not in the current legal mask")]
    NotInMask,
    #[error("row {0} is closed")]
    RowClosed(Color),
    #[error("cell is not to the right of the last crossed cell")]
    NotRightOfLastCross,
    #[error("pass slot {0} is already used")]
    PassAlreadyUsed(u8),
    #[error("action has no index in the action space")]
    OutOfRange,
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player list is empty")]
    NoPlayers,
    #[error("duplicate player id {0:?}")]
    DuplicatePlayer(String),
    #[error("at most {max} players supported, got {got}")]
    TooManyPlayers { max: usize, got: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal action {action} for {player}: {reason}")]
    IllegalAction {
        player: PlayerId,
        action: Action,
        reason: IllegalReason,
    },
    #[error("action index {0} is outside the action space")]
    ActionOutOfRange(usize),
    #[error("{actual} acted out of turn, expected {expected}")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },
    #[error("game is already finished")]
    GameOver,
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

impl EngineError {
    /// True for the illegal-action family of errors.
    #[must_use]
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, EngineError::IllegalAction { .. } | EngineError::ActionOutOfRange(_))
    }
}
