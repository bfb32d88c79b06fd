//! One colored row of a score sheet, packed into a `u16`.

use serde::{Deserialize, Serialize};

use crate::core::VALUE_COLUMNS;

/// Column of the rightmost value cell.
pub const LAST_COLUMN: usize = VALUE_COLUMNS - 1;
/// Column of the lock cell in observation grids.
pub const LOCK_COLUMN: usize = VALUE_COLUMNS;
/// Crossed value cells needed before crossing the last cell closes a row.
pub const CELLS_TO_LOCK: usize = 5;

const VALUE_BITS: u16 = (1 << VALUE_COLUMNS) - 1;
const LOCK_BIT: u16 = 1 << LOCK_COLUMN;

/// One colored row of a score sheet.
///
/// Bits `0..11` are the value cells in the row's own left-to-right order,
/// bit 11 is the lock cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    cells: u16,
}

impl Row {
    #[must_use]
    pub fn is_crossed(self, column: usize) -> bool {
        column < VALUE_COLUMNS && self.cells & (1 << column) != 0
    }

    /// Number of crossed value cells (the lock cell does not count).
    #[must_use]
    pub fn crossed_count(self) -> usize {
        (self.cells & VALUE_BITS).count_ones() as usize
    }

    /// Rightmost crossed column.
    #[must_use]
    pub fn last_crossed(self) -> Option<usize> {
        let values = self.cells & VALUE_BITS;
        (values != 0).then(|| 15 - values.leading_zeros() as usize)
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        self.cells & LOCK_BIT != 0
    }

    /// Columns still crossable: everything strictly right of the last cross.
    #[must_use]
    pub fn open_columns(self) -> u16 {
        match self.last_crossed() {
            None => VALUE_BITS,
            Some(last) => VALUE_BITS & !((1u16 << (last + 1)) - 1),
        }
    }

    /// Cross `column`, locking the row when it qualifies. Returns whether the
    /// lock was set. The caller has already checked `open_columns`.
    pub(crate) fn cross(&mut self, column: usize) -> bool {
        debug_assert!(self.open_columns() & (1 << column) != 0);
        self.cells |= 1 << column;
        if column == LAST_COLUMN && self.crossed_count() >= CELLS_TO_LOCK {
            self.cells |= LOCK_BIT;
            return true;
        }
        false
    }

    /// Triangular score for the crossed cells.
    #[must_use]
    pub fn points(self) -> i32 {
        let n = self.crossed_count() as i32;
        n * (n + 1) / 2
    }

    /// Grid form: 11 value cells followed by the lock cell.
    #[must_use]
    pub fn cells(self) -> [u8; VALUE_COLUMNS + 1] {
        std::array::from_fn(|c| u8::from(self.cells & (1 << c) != 0))
    }
}
