//! Live turn counter over the round schedule.

use serde::{Deserialize, Serialize};

use super::schedule::{self, Phase};
use crate::core::PlayerId;

/// What the turn that just finished implies for the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnEnd {
    /// The finished turn was in the second phase.
    pub was_second_phase: bool,
    /// The last seat in the rotation just acted.
    pub rotation_complete: bool,
    /// The finished turn closed its round; dice are due for a reroll.
    pub round_complete: bool,
}

/// Step counter plus table size; answers whose turn it is and in which phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundTracker {
    step_count: usize,
    num_players: usize,
}

impl RoundTracker {
    /// Tracker positioned on the first turn of round 1.
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        debug_assert!(num_players > 0);
        Self {
            step_count: 1,
            num_players,
        }
    }

    /// 1-based index of the turn being played.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    #[must_use]
    pub fn round(&self) -> usize {
        schedule::round(self.step_count, self.num_players)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        schedule::phase(self.step_count, self.num_players)
    }

    #[must_use]
    pub fn is_second_phase(&self) -> bool {
        self.phase() == Phase::Second
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::from_index(schedule::acting_index(self.step_count, self.num_players))
    }

    #[must_use]
    pub fn tosser(&self) -> PlayerId {
        PlayerId::from_index(schedule::tosser_index(self.round(), self.num_players))
    }

    #[must_use]
    pub fn is_tosser(&self, player: PlayerId) -> bool {
        self.tosser() == player
    }

    /// Second-phase turns of everyone but the tosser are skipped.
    #[must_use]
    pub fn is_skipped(&self, player: PlayerId) -> bool {
        self.is_second_phase() && !self.is_tosser(player)
    }

    /// Finish the current turn and move to the next one.
    pub fn advance(&mut self) -> TurnEnd {
        let end = TurnEnd {
            was_second_phase: self.is_second_phase(),
            rotation_complete: self.current_player().index() + 1 == self.num_players,
            round_complete: schedule::is_round_end(self.step_count, self.num_players),
        };
        self.step_count += 1;
        end
    }
}
