//! Action encoding: integer index ↔ `Action`.
//!
//! The action space is fixed at 55 indices, shared by all players:
//!
//! | index   | action                                   |
//! |---------|------------------------------------------|
//! | 0..=43  | cross value cell `row = i / 11`, `col = i % 11` |
//! | 44..=47 | use pass slot `i - 44`                   |
//! | 48..=54 | no-op `i - 48` (padding, no effect)      |
//!
//! Indices are decoded once at the boundary; everything below works on the
//! tagged `Action`.

use serde::{Deserialize, Serialize};

use super::color::{Color, ROW_COUNT};
use super::error::EngineError;
use super::player::PlayerId;

/// Playable value cells per row (numbers 2..=12).
pub const VALUE_COLUMNS: usize = 11;
/// Pass slots on each score sheet.
pub const PASS_SLOTS: usize = 4;
/// No-op padding actions.
pub const NOOP_SLOTS: usize = 7;
/// First pass index.
pub const PASS_OFFSET: usize = ROW_COUNT * VALUE_COLUMNS;
/// First no-op index.
pub const NOOP_OFFSET: usize = PASS_OFFSET + PASS_SLOTS;
/// Total action-space size.
pub const ACTION_SPACE_SIZE: usize = NOOP_OFFSET + NOOP_SLOTS;

/// A decoded action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Cross the value cell at `column` of the `row` row.
    Cross { row: Color, column: u8 },
    /// Mark pass slot `0..4`.
    Pass(u8),
    /// Do nothing; the slot only keeps the index space dense.
    NoOp(u8),
}

impl Action {
    /// Decode an action index.
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        match index {
            i if i < PASS_OFFSET => Ok(Action::Cross {
                row: Color::ROWS[i / VALUE_COLUMNS],
                column: (i % VALUE_COLUMNS) as u8,
            }),
            i if i < NOOP_OFFSET => Ok(Action::Pass((i - PASS_OFFSET) as u8)),
            i if i < ACTION_SPACE_SIZE => Ok(Action::NoOp((i - NOOP_OFFSET) as u8)),
            i => Err(EngineError::ActionOutOfRange(i)),
        }
    }

    /// Encode back to an action index, or `None` when a field is outside
    /// its range (neutral row, column past 10, slot past the last pass or
    /// no-op).
    #[must_use]
    pub fn try_index(self) -> Option<usize> {
        match self {
            Action::Cross { row, column } if (column as usize) < VALUE_COLUMNS => {
                row.row_index().map(|r| r * VALUE_COLUMNS + column as usize)
            }
            Action::Pass(slot) if (slot as usize) < PASS_SLOTS => Some(PASS_OFFSET + slot as usize),
            Action::NoOp(slot) if (slot as usize) < NOOP_SLOTS => Some(NOOP_OFFSET + slot as usize),
            _ => None,
        }
    }

    /// Encode back to an action index.
    ///
    /// Actions without an index map past the end of the action space so
    /// they never match a mask bit.
    #[must_use]
    pub fn index(self) -> usize {
        self.try_index().unwrap_or(ACTION_SPACE_SIZE)
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Action::Pass(_))
    }

    #[must_use]
    pub fn is_noop(self) -> bool {
        matches!(self, Action::NoOp(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Cross { row, column } => {
                write!(f, "cross {} {}", row, row.value_at(*column as usize))
            }
            Action::Pass(slot) => write!(f, "pass #{}", slot),
            Action::NoOp(slot) => write!(f, "no-op #{}", slot),
        }
    }
}

/// An applied action with the turn it was taken on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Round the action was taken in (1-based).
    pub round: u32,
    /// Global step count of the turn (1-based).
    pub step: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, step: u32) -> Self {
        Self {
            player,
            action,
            round,
            step,
        }
    }
}
