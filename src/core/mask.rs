//! Fixed-size legal-action mask.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ACTION_SPACE_SIZE, NOOP_OFFSET, NOOP_SLOTS, VALUE_COLUMNS};
use super::color::Color;

/// Decoded legal actions; a typical mask holds at most a handful of entries.
pub type ActionList = SmallVec<[Action; 16]>;

const ALL_BITS: u64 = (1 << ACTION_SPACE_SIZE) - 1;
const ROW_BITS: u64 = (1 << VALUE_COLUMNS) - 1;

/// Bitset over the 55-action space. Bit `i` is action index `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask(u64);

impl ActionMask {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw bits; bits past the action space are dropped.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & ALL_BITS)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Whether action index `index` is legal.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < ACTION_SPACE_SIZE && (self.0 >> index) & 1 != 0
    }

    pub fn set(&mut self, index: usize) {
        debug_assert!(index < ACTION_SPACE_SIZE);
        self.0 |= 1 << index;
    }

    /// Place an 11-bit row pattern (bit `c` = column `c`) into `row`'s slots.
    pub fn set_row(&mut self, row: Color, columns: u16) {
        if let Some(r) = row.row_index() {
            self.0 |= (u64::from(columns) & ROW_BITS) << (r * VALUE_COLUMNS);
        }
    }

    /// Clear every value cell of `row`.
    pub fn clear_row(&mut self, row: Color) {
        if let Some(r) = row.row_index() {
            self.0 &= !(ROW_BITS << (r * VALUE_COLUMNS));
        }
    }

    /// The 11-bit column pattern of `row`.
    #[must_use]
    pub fn row(self, row: Color) -> u16 {
        row.row_index()
            .map_or(0, |r| ((self.0 >> (r * VALUE_COLUMNS)) & ROW_BITS) as u16)
    }

    /// Mark all no-op actions legal.
    pub fn set_noops(&mut self) {
        self.0 |= ((1u64 << NOOP_SLOTS) - 1) << NOOP_OFFSET;
    }

    #[must_use]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Legal indices in ascending order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..ACTION_SPACE_SIZE).filter(move |i| self.contains(*i))
    }

    /// Smallest legal index.
    #[must_use]
    pub fn first(self) -> Option<usize> {
        (self.0 != 0).then(|| self.0.trailing_zeros() as usize)
    }

    /// Largest legal index.
    #[must_use]
    pub fn last(self) -> Option<usize> {
        (self.0 != 0).then(|| 63 - self.0.leading_zeros() as usize)
    }

    /// Decode every legal index.
    #[must_use]
    pub fn actions(self) -> ActionList {
        self.indices()
            .filter_map(|i| Action::from_index(i).ok())
            .collect()
    }

    /// 0/1 vector form for adapters and observations.
    #[must_use]
    pub fn to_array(self) -> [u8; ACTION_SPACE_SIZE] {
        let mut out = [0u8; ACTION_SPACE_SIZE];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = u8::from(self.contains(i));
        }
        out
    }
}

impl std::ops::BitAnd for ActionMask {
    type Output = ActionMask;

    fn bitand(self, rhs: ActionMask) -> ActionMask {
        ActionMask(self.0 & rhs.0)
    }
}
