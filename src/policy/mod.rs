//! Scripted players and a play-out driver.
//!
//! Policies see only the legal mask. They are baselines and opponents for
//! training loops, not learned models.

mod baseline;
mod runner;

pub use baseline::{LongPlayingPolicy, LowestIndexPolicy, Policy, UniformRandomPolicy};
pub use runner::{play_game, Playout};
