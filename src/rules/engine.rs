//! Rules engine trait for masked, turn-based games.

use serde::{Deserialize, Serialize};

use crate::core::{ActionList, ActionMask, EngineError, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every player tied.
    Draw,
    /// Several players share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Ranking by highest score.
    ///
    /// ```
    /// use qwixx_engine::core::{PlayerId, PlayerMap};
    /// use qwixx_engine::rules::GameResult;
    ///
    /// let scores = PlayerMap::new(3, |p| [4, 9, 9][p.index()]);
    /// assert_eq!(
    ///     GameResult::from_scores(&scores),
    ///     GameResult::Winners(vec![PlayerId(1), PlayerId(2)])
    /// );
    /// ```
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<i32>) -> Self {
        let Some(best) = scores.values().copied().max() else {
            return GameResult::Draw;
        };
        let top: Vec<PlayerId> = scores
            .iter()
            .filter(|(_, s)| **s == best)
            .map(|(p, _)| p)
            .collect();

        match top.as_slice() {
            [only] => GameResult::Winner(*only),
            _ if top.len() == scores.player_count() => GameResult::Draw,
            _ => GameResult::Winners(top),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// What a single `step` did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Score change of the acting player.
    pub reward: i32,
    /// The turn was a non-tosser's second-phase slot and was ignored.
    pub skipped: bool,
    /// Dice were rerolled for the next round.
    pub rerolled: bool,
    /// The game ended with this step.
    pub finished: bool,
}

/// A turn-based game over a fixed, masked action space.
///
/// ## Implementation Notes
///
/// - `legal_mask` may be asked for any player at any time
/// - `step` must reject actions outside the mask without changing state
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    /// End-of-game report.
    type Summary;

    fn player_count(&self) -> usize;

    /// The player expected to call `step` next.
    fn current_player(&self) -> PlayerId;

    /// Legal action indices for `player` right now.
    fn legal_mask(&self, player: PlayerId) -> ActionMask;

    /// Play one turn for `player` with action index `action`.
    fn step(&mut self, player: PlayerId, action: usize) -> Result<StepOutcome, EngineError>;

    /// `Some(result)` once the game has ended.
    fn is_terminal(&self) -> Option<GameResult>;

    /// `Some` once the game has ended.
    fn summary(&self) -> Option<Self::Summary>;

    /// Legal actions for `player`, decoded.
    fn legal_actions(&self, player: PlayerId) -> ActionList {
        self.legal_mask(player).actions()
    }
}
