//! Core engine types: players, RNG, configuration, colors, actions, masks, errors.
//!
//! Everything here is free of game flow; the score sheet, board and round
//! tracking build on these types.

pub mod player;
pub mod rng;
pub mod config;
pub mod color;
pub mod action;
pub mod mask;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{GameConfig, MAX_PLAYERS};
pub use color::{Color, ColorSet, ROW_COUNT};
pub use action::{
    Action, ActionRecord, ACTION_SPACE_SIZE, NOOP_OFFSET, NOOP_SLOTS, PASS_OFFSET, PASS_SLOTS,
    VALUE_COLUMNS,
};
pub use mask::{ActionList, ActionMask};
pub use error::{ConfigError, EngineError, IllegalReason};
