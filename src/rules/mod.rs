//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to expose:
//! - A legal-action mask per player
//! - A `step` that validates against the mask and advances turn order
//! - Win/loss detection
//!
//! Policies and drivers are written against the trait, not a concrete game.

pub mod engine;

pub use engine::{GameResult, RulesEngine, StepOutcome};
