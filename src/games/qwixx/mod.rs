//! Qwixx for one or more players.
//!
//! Each round every player may cross the neutral-dice total on their own
//! sheet; then the round's tosser alone may cross a neutral-plus-colored total,
//! and must take a pass if they crossed nothing all round. The game ends when
//! someone has used all four passes or two row colors are closed.

mod game;
mod observation;
mod summary;

pub use game::{QwixxGame, QwixxGameBuilder};
pub use observation::Observation;
pub use summary::GameSummary;
