//! End-of-game summary.

use serde::{Deserialize, Serialize};

use crate::board::FinishReason;
use crate::core::{ColorSet, PlayerMap};
use crate::rules::GameResult;

/// End-of-game snapshot for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub scores: PlayerMap<i32>,
    pub pass_counts: PlayerMap<usize>,
    pub closed_rows: ColorSet,
    pub reason: FinishReason,
    pub result: GameResult,
    /// Round the game ended in.
    pub rounds: usize,
}
