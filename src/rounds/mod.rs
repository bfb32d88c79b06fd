//! Turn order: rounds, phases and the rotating dice tosser.
//!
//! The arithmetic lives in free functions over `(step_count, num_players)`;
//! `RoundTracker` wraps a live step counter around them.

mod schedule;
mod tracker;

pub use schedule::{
    acting_index, is_round_end, is_second_phase, phase, round, steps_per_round, tosser_index,
    Phase,
};
pub use tracker::{RoundTracker, TurnEnd};
