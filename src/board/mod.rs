//! The shared table: one score sheet per player and the dice pool.
//!
//! Closed row colors are aggregated over every sheet. Sheets never read each
//! other; a row closed on any sheet is masked out for everyone here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Action, ActionMask, Color, ColorSet, EngineError, GameRng, IllegalReason, PlayerId, PlayerMap,
    PASS_SLOTS,
};
use crate::dice::DicePool;
use crate::scorecard::{CardUpdate, ScoreCard, TurnView};

/// Distinct closed colors that end the game.
pub const CLOSED_ROWS_TO_FINISH: usize = 2;

/// Why a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// This player used their last pass slot.
    PassLimit(PlayerId),
    /// Enough distinct row colors were closed.
    ClosedRows,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: PlayerMap<ScoreCard>,
    dice: DicePool,
}

impl Board {
    /// Fresh sheets for `player_count` players; dice all show 1.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            cards: PlayerMap::with_default(player_count),
            dice: DicePool::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.cards.player_count()
    }

    pub fn roll_dice(&mut self, rng: &mut GameRng) {
        self.dice.roll_all(rng);
    }

    #[must_use]
    pub fn dice(&self) -> &DicePool {
        &self.dice
    }

    /// Replace the dice outright.
    pub fn set_dice(&mut self, dice: DicePool) {
        self.dice = dice;
    }

    #[must_use]
    pub fn card(&self, player: PlayerId) -> Option<&ScoreCard> {
        self.cards.get(player)
    }

    pub fn cards(&self) -> impl Iterator<Item = (PlayerId, &ScoreCard)> {
        self.cards.iter()
    }

    pub(crate) fn card_mut(&mut self, player: PlayerId) -> Option<&mut ScoreCard> {
        self.cards.get_mut(player)
    }

    /// Row colors closed on any sheet, counted once per color.
    #[must_use]
    pub fn closed_rows(&self) -> ColorSet {
        self.cards
            .values()
            .fold(ColorSet::empty(), |acc, card| acc.union(card.closed_rows()))
    }

    /// The player's sheet mask with every globally closed row removed.
    #[must_use]
    pub fn legal_mask(&self, player: PlayerId, view: TurnView) -> ActionMask {
        let Some(card) = self.cards.get(player) else {
            return ActionMask::empty();
        };
        let mut mask = card.legal_mask(&self.dice, view);
        for color in self.closed_rows().iter() {
            mask.clear_row(color);
        }
        mask
    }

    /// Apply an action to one sheet.
    ///
    /// Guards only sheet consistency and global row closure; the full mask
    /// check belongs to the caller.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<CardUpdate, EngineError> {
        let illegal = |reason| EngineError::IllegalAction {
            player,
            action,
            reason,
        };

        if let Action::Cross { row, .. } = action {
            if self.is_row_closed(row) {
                return Err(illegal(IllegalReason::RowClosed(row)));
            }
        }

        let card = self
            .cards
            .get_mut(player)
            .ok_or_else(|| EngineError::UnknownPlayer(player.to_string()))?;
        let update = card.apply(action).map_err(illegal)?;

        if let Some(color) = update.closed {
            debug!(%player, %color, "row closed");
        }
        Ok(update)
    }

    /// Reason the game is over, if it is.
    ///
    /// A player with all pass slots used ends it first; otherwise two
    /// distinct closed colors do. The same color closed on two sheets
    /// counts once.
    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        if let Some((player, _)) = self
            .cards
            .iter()
            .find(|(_, card)| card.pass_count() == PASS_SLOTS)
        {
            return Some(FinishReason::PassLimit(player));
        }
        (self.closed_rows().len() >= CLOSED_ROWS_TO_FINISH).then_some(FinishReason::ClosedRows)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finish_reason().is_some()
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.cards.map(|_, card| card.score())
    }

    /// Whether `color` is closed for every player.
    #[must_use]
    pub fn is_row_closed(&self, color: Color) -> bool {
        self.closed_rows().contains(color)
    }
}
