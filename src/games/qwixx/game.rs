//! Qwixx game implementation.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::observation::Observation;
use super::summary::GameSummary;
use crate::board::{Board, FinishReason};
use crate::core::{
    Action, ActionMask, ActionRecord, EngineError, GameConfig, GameRng, GameRngState,
    IllegalReason, PlayerId, PlayerMap,
};
use crate::dice::DicePool;
use crate::rounds::{Phase, RoundTracker};
use crate::rules::{GameResult, RulesEngine, StepOutcome};
use crate::scorecard::TurnView;

/// A full game: board, turn order, dice stream and per-player rewards.
#[derive(Clone, Debug)]
pub struct QwixxGame {
    config: GameConfig,
    seats: FxHashMap<String, PlayerId>,
    board: Board,
    rounds: RoundTracker,
    rng: GameRng,
    rewards: PlayerMap<i32>,
    cumulative_rewards: PlayerMap<i32>,
    finished: Option<FinishReason>,
    history: Vector<ActionRecord>,
}

/// Builder for creating a QwixxGame.
#[derive(Clone, Debug, Default)]
pub struct QwixxGameBuilder {
    config: GameConfig,
}

impl QwixxGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Named players, in turn order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// `player_1..=player_n`.
    pub fn player_count(mut self, count: usize) -> Self {
        self.config = GameConfig::numbered(count, self.config.seed);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<QwixxGame, EngineError> {
        QwixxGame::new(self.config)
    }
}

impl QwixxGame {
    /// Validate `config` and deal a fresh game with its seed.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let player_count = config.player_count();
        let seats = config
            .player_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), PlayerId::from_index(i)))
            .collect();
        let seed = config.seed;

        let mut game = Self {
            config,
            seats,
            board: Board::new(player_count),
            rounds: RoundTracker::new(player_count),
            rng: GameRng::new(seed),
            rewards: PlayerMap::with_value(player_count, 0),
            cumulative_rewards: PlayerMap::with_value(player_count, 0),
            finished: None,
            history: Vector::new(),
        };
        game.reset(seed);
        Ok(game)
    }

    /// Start over with fresh sheets and a new dice stream.
    ///
    /// The first player is to act in round 1 and the dice are already rolled.
    pub fn reset(&mut self, seed: u64) {
        let player_count = self.player_count();
        self.config.seed = seed;
        self.rng = GameRng::new(seed);
        self.board = Board::new(player_count);
        self.board.roll_dice(&mut self.rng);
        self.rounds = RoundTracker::new(player_count);
        self.rewards.fill(0);
        self.cumulative_rewards.fill(0);
        self.finished = None;
        self.history = Vector::new();
        debug!(seed, players = player_count, faces = ?self.board.dice().faces(), "game reset");
    }

    // === Players ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seat of the player called `name`.
    pub fn player_id(&self, name: &str) -> Result<PlayerId, EngineError> {
        self.seats
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownPlayer(name.to_string()))
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.config.player_names.get(player.index()).map(String::as_str)
    }

    // === Turn order ===

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.rounds.step_count()
    }

    #[must_use]
    pub fn round(&self) -> usize {
        self.rounds.round()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.rounds.phase()
    }

    /// Player who rolled this round.
    #[must_use]
    pub fn tosser(&self) -> PlayerId {
        self.rounds.tosser()
    }

    /// Whether `player`'s turn is auto-skipped in the current phase.
    #[must_use]
    pub fn is_skipped(&self, player: PlayerId) -> bool {
        self.rounds.is_skipped(player)
    }

    fn turn_view(&self, player: PlayerId) -> TurnView {
        TurnView::new(self.rounds.is_tosser(player), self.rounds.is_second_phase())
    }

    // === Board access ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Overwrite the current dice.
    pub fn set_dice(&mut self, dice: DicePool) {
        self.board.set_dice(dice);
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Applied actions, oldest first. Skipped turns are not recorded.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Observation ===

    #[must_use]
    pub fn observe(&self, player: PlayerId) -> Observation {
        Observation {
            player,
            grid: self
                .board
                .card(player)
                .map(|card| card.grid())
                .unwrap_or_default(),
            legal_mask: self.legal_mask(player),
        }
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.board.scores()
    }

    /// Rewards from the most recent step.
    #[must_use]
    pub fn rewards(&self) -> &PlayerMap<i32> {
        &self.rewards
    }

    #[must_use]
    pub fn cumulative_rewards(&self) -> &PlayerMap<i32> {
        &self.cumulative_rewards
    }

    /// Whether every player has been marked done.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finished
    }

    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let reason = self.finished?;
        let scores = self.scores();
        Some(GameSummary {
            result: GameResult::from_scores(&scores),
            pass_counts: PlayerMap::new(self.player_count(), |p| {
                self.board.card(p).map_or(0, |c| c.pass_count())
            }),
            closed_rows: self.board.closed_rows(),
            reason,
            // the counter has already moved past the final turn
            rounds: crate::rounds::round(self.step_count() - 1, self.player_count()),
            scores,
        })
    }

    // === Turns ===

    /// Play `action` for `player` as a decoded action.
    ///
    /// Fails with `IllegalAction` when the action has no index, even on a
    /// skipped turn.
    pub fn step_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<StepOutcome, EngineError> {
        let index = action.try_index().ok_or_else(|| EngineError::IllegalAction {
            player,
            action,
            reason: IllegalReason::OutOfRange,
        })?;
        self.step(player, index)
    }

    /// Validate and apply one turn.
    ///
    /// Nothing changes when this returns an error.
    fn play_turn(&mut self, player: PlayerId, index: usize) -> Result<StepOutcome, EngineError> {
        if self.finished.is_some() {
            return Err(EngineError::GameOver);
        }
        let expected = self.rounds.current_player();
        if player != expected {
            return Err(EngineError::OutOfTurn {
                expected,
                actual: player,
            });
        }

        let mut outcome = StepOutcome::default();

        if self.rounds.is_skipped(player) {
            trace!(%player, step = self.step_count(), "second-phase turn skipped");
            self.rewards.fill(0);
            outcome.skipped = true;
        } else {
            let action = Action::from_index(index)?;
            if !self.legal_mask(player).contains(index) {
                return Err(EngineError::IllegalAction {
                    player,
                    action,
                    reason: IllegalReason::NotInMask,
                });
            }

            self.rewards.fill(0);
            let before = self.board.card(player).map_or(0, |c| c.score());
            self.board.apply(player, action)?;
            let after = self.board.card(player).map_or(0, |c| c.score());

            outcome.reward = after - before;
            self.rewards[player] = outcome.reward;
            self.cumulative_rewards[player] += outcome.reward;
            self.history.push_back(ActionRecord::new(
                player,
                action,
                self.round() as u32,
                self.step_count() as u32,
            ));
            debug!(%player, %action, reward = outcome.reward, step = self.step_count(), "action applied");
        }

        let end = self.rounds.advance();

        if end.was_second_phase {
            if let Some(card) = self.board.card_mut(player) {
                card.start_new_round();
            }
        }

        if end.rotation_complete {
            if let Some(reason) = self.board.finish_reason() {
                self.finished = Some(reason);
                outcome.finished = true;
                debug!(?reason, scores = ?self.scores(), "game finished");
            }
        }

        if end.round_complete && !outcome.finished {
            self.board.roll_dice(&mut self.rng);
            outcome.rerolled = true;
            debug!(round = self.round(), faces = ?self.board.dice().faces(), "dice rerolled");
        }

        Ok(outcome)
    }
}

impl RulesEngine for QwixxGame {
    type Summary = GameSummary;

    fn player_count(&self) -> usize {
        self.config.player_count()
    }

    fn current_player(&self) -> PlayerId {
        self.rounds.current_player()
    }

    fn legal_mask(&self, player: PlayerId) -> ActionMask {
        self.board.legal_mask(player, self.turn_view(player))
    }

    /// Fails with `IllegalAction` when `action` is not in `legal_mask(player)`.
    /// Second-phase turns of non-tossers accept any action and change nothing
    /// but the turn counter.
    fn step(&mut self, player: PlayerId, action: usize) -> Result<StepOutcome, EngineError> {
        self.play_turn(player, action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.finished.map(|_| GameResult::from_scores(&self.scores()))
    }

    fn summary(&self) -> Option<GameSummary> {
        QwixxGame::summary(self)
    }
}
