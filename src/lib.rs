//! # qwixx-engine
//!
//! A Qwixx dice-game engine for reinforcement-learning loops.
//!
//! ## Design Principles
//!
//! 1. **Masked Action Space**: Every decision is one of 55 fixed indices.
//!    Legality is always exposed as a mask, and `step` rejects anything
//!    outside it without touching state.
//!
//! 2. **N-Player First**: Turn order, tosser rotation and termination are
//!    computed from `(step_count, player_count)` for any number of seats.
//!
//! 3. **Deterministic Replay**: Dice come from a seeded ChaCha stream; the
//!    same seed and actions always give the same game.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, colors, actions, masks, errors
//! - `dice`: The six-die pool and its roll
//! - `scorecard`: Per-player score sheets and their legal masks
//! - `board`: All sheets plus the dice and global row closures
//! - `rounds`: Round, phase and tosser arithmetic
//! - `rules`: `RulesEngine` trait and game results
//! - `games`: The Qwixx game loop
//! - `policy`: Scripted baseline policies and a play-out driver

pub mod core;
pub mod dice;
pub mod scorecard;
pub mod board;
pub mod rounds;
pub mod rules;
pub mod games;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionMask, ActionRecord, Color, ConfigError, EngineError, GameConfig, GameRng,
    GameRngState, IllegalReason, PlayerId, PlayerMap, ACTION_SPACE_SIZE,
};

pub use crate::dice::{DicePool, Die};

pub use crate::scorecard::{ScoreCard, TurnView};

pub use crate::board::{Board, FinishReason};

pub use crate::rounds::{Phase, RoundTracker};

pub use crate::rules::{GameResult, RulesEngine, StepOutcome};

pub use crate::games::qwixx::{GameSummary, Observation, QwixxGame, QwixxGameBuilder};

pub use crate::policy::{
    play_game, LongPlayingPolicy, LowestIndexPolicy, Playout, Policy, UniformRandomPolicy,
};
