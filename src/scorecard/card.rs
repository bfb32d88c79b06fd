//! Per-player score sheet: crossing, scoring and the legal-action mask.

use serde::{Deserialize, Serialize};

use super::row::Row;
use crate::core::{
    Action, ActionMask, Color, ColorSet, IllegalReason, PASS_OFFSET, PASS_SLOTS, ROW_COUNT,
    VALUE_COLUMNS,
};
use crate::dice::DicePool;

/// Points lost per used pass slot.
pub const PASS_PENALTY: i32 = 5;

/// Rows in the observation grid: four colors plus the pass row.
pub const GRID_ROWS: usize = ROW_COUNT + 1;
/// Columns in the observation grid: value cells plus the lock cell.
pub const GRID_COLUMNS: usize = VALUE_COLUMNS + 1;

/// Observation grid of one score sheet.
pub type Grid = [[u8; GRID_COLUMNS]; GRID_ROWS];

/// Who is asking for a mask, and when.
///
/// `is_tosser` is whether the player rolled this round; `is_second_phase`
/// whether the round is in its colored-dice half.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub is_tosser: bool,
    pub is_second_phase: bool,
}

impl TurnView {
    #[must_use]
    pub const fn new(is_tosser: bool, is_second_phase: bool) -> Self {
        Self {
            is_tosser,
            is_second_phase,
        }
    }
}

/// Result of applying an action to a score sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardUpdate {
    /// Row closed by this action, if any.
    pub closed: Option<Color>,
}

/// One player's score sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreCard {
    rows: [Row; ROW_COUNT],
    /// Bit `i` set once pass slot `i` is used.
    passes: u8,
    crossed_this_round: bool,
}

impl ScoreCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The row for a row color. Neutral has no row.
    #[must_use]
    pub fn row(&self, color: Color) -> Option<Row> {
        color.row_index().map(|r| self.rows[r])
    }

    /// Apply a decoded action.
    ///
    /// Only the sheet's own consistency is guarded here (closed row, monotonic
    /// order, reused pass); whether the dice allow the cross is the mask's job.
    pub fn apply(&mut self, action: Action) -> Result<CardUpdate, IllegalReason> {
        match action {
            Action::Cross { row, column } => {
                let r = row.row_index().ok_or(IllegalReason::OutOfRange)?;
                let column = column as usize;
                if column >= VALUE_COLUMNS {
                    return Err(IllegalReason::OutOfRange);
                }
                let target = &mut self.rows[r];
                if target.is_locked() {
                    return Err(IllegalReason::RowClosed(row));
                }
                if target.open_columns() & (1 << column) == 0 {
                    return Err(IllegalReason::NotRightOfLastCross);
                }
                let locked = target.cross(column);
                self.crossed_this_round = true;
                Ok(CardUpdate {
                    closed: locked.then_some(row),
                })
            }
            Action::Pass(slot) => {
                if slot as usize >= PASS_SLOTS {
                    return Err(IllegalReason::OutOfRange);
                }
                if self.passes & (1 << slot) != 0 {
                    return Err(IllegalReason::PassAlreadyUsed(slot));
                }
                self.passes |= 1 << slot;
                Ok(CardUpdate::default())
            }
            Action::NoOp(_) => Ok(CardUpdate::default()),
        }
    }

    /// Σ triangular(crossed cells per row) − 5 × passes used.
    #[must_use]
    pub fn score(&self) -> i32 {
        let rows: i32 = self.rows.iter().map(|r| r.points()).sum();
        rows - PASS_PENALTY * self.pass_count() as i32
    }

    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.passes.count_ones() as usize
    }

    #[must_use]
    pub fn is_pass_used(&self, slot: usize) -> bool {
        slot < PASS_SLOTS && self.passes & (1 << slot) != 0
    }

    /// Rows this player has locked.
    #[must_use]
    pub fn closed_rows(&self) -> ColorSet {
        Color::ROWS
            .into_iter()
            .zip(self.rows.iter())
            .filter(|(_, row)| row.is_locked())
            .map(|(color, _)| color)
            .collect()
    }

    #[must_use]
    pub fn crossed_something_in_current_round(&self) -> bool {
        self.crossed_this_round
    }

    /// Clear the per-round cross flag.
    pub fn start_new_round(&mut self) {
        self.crossed_this_round = false;
    }

    /// Legal actions for this sheet alone (no cross-player row closures).
    ///
    /// Value cells are legal where the row is still open to the right of its
    /// last cross AND the dice offer that number. Then exactly one of two
    /// fallbacks is added: a tosser in the second phase who has crossed
    /// nothing this round must pass (unused pass slots legal, no-ops not);
    /// everyone else may do nothing (no-ops legal, pass slots not).
    #[must_use]
    pub fn legal_mask(&self, dice: &DicePool, view: TurnView) -> ActionMask {
        let mut mask = ActionMask::empty();

        for (color, row) in Color::ROWS.into_iter().zip(self.rows.iter()) {
            let allowed = row.open_columns() & Self::dice_columns(dice, color, view);
            mask.set_row(color, allowed);
        }

        let must_pass = view.is_tosser && view.is_second_phase && !self.crossed_this_round;
        if must_pass {
            for slot in 0..PASS_SLOTS {
                if !self.is_pass_used(slot) {
                    mask.set(PASS_OFFSET + slot);
                }
            }
        } else {
            mask.set_noops();
        }
        mask
    }

    /// Column pattern the dice allow in one row.
    fn dice_columns(dice: &DicePool, color: Color, view: TurnView) -> u16 {
        if !view.is_second_phase {
            return 1 << color.column_for_sum(dice.white_sum());
        }
        if !view.is_tosser {
            return 0;
        }
        dice.colored_candidates(color)
            .map_or(0, |sums| {
                sums.iter().fold(0, |acc, &s| acc | 1 << color.column_for_sum(s))
            })
    }

    /// 5×12 grid: four color rows (value cells then lock), then the pass row.
    #[must_use]
    pub fn grid(&self) -> Grid {
        let mut grid = [[0u8; GRID_COLUMNS]; GRID_ROWS];
        for (out, row) in grid.iter_mut().zip(self.rows.iter()) {
            *out = row.cells();
        }
        for slot in 0..PASS_SLOTS {
            grid[ROW_COUNT][slot] = u8::from(self.is_pass_used(slot));
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NOOP_OFFSET, NOOP_SLOTS};

    fn cross(row: Color, column: u8) -> Action {
        Action::Cross { row, column }
    }

    fn value_cells(mask: ActionMask) -> Vec<usize> {
        mask.indices().filter(|i| *i < PASS_OFFSET).collect()
    }

    const FIRST: TurnView = TurnView::new(false, false);
    const TOSSER_SECOND: TurnView = TurnView::new(true, true);
    const OTHER_SECOND: TurnView = TurnView::new(false, true);

    #[test]
    fn test_fresh_card() {
        let card = ScoreCard::new();
        assert_eq!(card.score(), 0);
        assert_eq!(card.pass_count(), 0);
        assert!(card.closed_rows().is_empty());
        assert!(!card.crossed_something_in_current_round());
    }

    #[test]
    fn test_pass_scores_minus_five() {
        let mut card = ScoreCard::new();
        card.apply(Action::from_index(44).unwrap()).unwrap();
        assert!(card.is_pass_used(0));
        assert_eq!(card.score(), -5);
        assert_eq!(
            card.apply(Action::Pass(0)),
            Err(IllegalReason::PassAlreadyUsed(0))
        );
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let mut card = ScoreCard::new();
        assert_eq!(card.apply(Action::Pass(4)), Err(IllegalReason::OutOfRange));
        assert_eq!(card.apply(cross(Color::Red, 11)), Err(IllegalReason::OutOfRange));
        assert_eq!(card.apply(cross(Color::Neutral, 0)), Err(IllegalReason::OutOfRange));
        assert_eq!(card, ScoreCard::new());
    }

    #[test]
    fn test_cross_sets_round_flag_and_scores() {
        let mut card = ScoreCard::new();
        card.apply(cross(Color::Red, 2)).unwrap();
        card.apply(cross(Color::Red, 4)).unwrap();
        card.apply(cross(Color::Blue, 0)).unwrap();
        assert!(card.crossed_something_in_current_round());
        assert_eq!(card.score(), 3 + 1);

        card.start_new_round();
        assert!(!card.crossed_something_in_current_round());
    }

    #[test]
    fn test_noop_changes_nothing() {
        let mut card = ScoreCard::new();
        let before = card.clone();
        assert_eq!(card.apply(Action::NoOp(6)), Ok(CardUpdate::default()));
        assert_eq!(card, before);
    }

    #[test]
    fn test_monotonic_guard() {
        let mut card = ScoreCard::new();
        card.apply(cross(Color::Yellow, 5)).unwrap();
        assert_eq!(
            card.apply(cross(Color::Yellow, 5)),
            Err(IllegalReason::NotRightOfLastCross)
        );
        assert_eq!(
            card.apply(cross(Color::Yellow, 3)),
            Err(IllegalReason::NotRightOfLastCross)
        );
        assert!(card.apply(cross(Color::Yellow, 6)).is_ok());
    }

    #[test]
    fn test_closing_a_row() {
        let mut card = ScoreCard::new();
        for column in [0, 2, 4, 6] {
            card.apply(cross(Color::Green, column)).unwrap();
        }
        let update = card.apply(cross(Color::Green, 10)).unwrap();
        assert_eq!(update.closed, Some(Color::Green));
        assert!(card.closed_rows().contains(Color::Green));
        assert_eq!(card.grid()[2][11], 1);
        assert_eq!(
            card.apply(cross(Color::Green, 10)),
            Err(IllegalReason::RowClosed(Color::Green))
        );
    }

    #[test]
    fn test_first_phase_all_ones() {
        let card = ScoreCard::new();
        let mask = card.legal_mask(&DicePool::from_faces([1; 6]), FIRST);
        assert_eq!(value_cells(mask), vec![0, 11, 22 + 10, 33 + 10]);
        for slot in 0..NOOP_SLOTS {
            assert!(mask.contains(NOOP_OFFSET + slot));
        }
        for slot in 0..PASS_SLOTS {
            assert!(!mask.contains(PASS_OFFSET + slot));
        }
    }

    #[test]
    fn test_first_phase_same_for_tosser() {
        let card = ScoreCard::new();
        let dice = DicePool::from_faces([6, 6, 6, 6, 3, 3]);
        assert_eq!(
            card.legal_mask(&dice, FIRST),
            card.legal_mask(&dice, TurnView::new(true, false))
        );
    }

    #[test]
    fn test_mask_respects_crossed_cells() {
        let mut card = ScoreCard::new();
        card.apply(cross(Color::Red, 0)).unwrap();
        card.apply(cross(Color::Yellow, 10)).unwrap();
        card.apply(cross(Color::Green, 5)).unwrap();

        let mask = card.legal_mask(&DicePool::from_faces([3; 6]), FIRST);
        // white sum 6: red col 4, yellow blocked, green/blue col 6
        assert_eq!(value_cells(mask), vec![4, 22 + 6, 33 + 6]);
    }

    #[test]
    fn test_second_phase_non_tosser_has_no_value_cells() {
        let card = ScoreCard::new();
        let mask = card.legal_mask(&DicePool::from_faces([2; 6]), OTHER_SECOND);
        assert!(value_cells(mask).is_empty());
        assert_eq!(mask.count(), NOOP_SLOTS);
    }

    #[test]
    fn test_second_phase_tosser_uses_colored_sums() {
        let card = ScoreCard::new();
        // neutral 5 and 6; red 1 -> 6,7; blue 4 -> 9,10
        let dice = DicePool::from_faces([1, 2, 3, 4, 5, 6]);
        let mask = card.legal_mask(&dice, TOSSER_SECOND);
        assert_eq!(
            value_cells(mask),
            vec![4, 5, 11 + 5, 11 + 6, 22 + 3, 22 + 4, 33 + 2, 33 + 3]
        );
    }

    #[test]
    fn test_second_phase_tosser_duplicate_sums_collapse() {
        let card = ScoreCard::new();
        let mask = card.legal_mask(&DicePool::from_faces([4; 6]), TOSSER_SECOND);
        assert_eq!(value_cells(mask), vec![6, 11 + 6, 22 + 4, 33 + 4]);
    }

    #[test]
    fn test_forced_pass_for_tosser_who_crossed_nothing() {
        let card = ScoreCard::new();
        let mask = card.legal_mask(&DicePool::from_faces([4; 6]), TOSSER_SECOND);
        for slot in 0..PASS_SLOTS {
            assert!(mask.contains(PASS_OFFSET + slot));
        }
        for slot in 0..NOOP_SLOTS {
            assert!(!mask.contains(NOOP_OFFSET + slot));
        }
    }

    #[test]
    fn test_forced_pass_with_full_rows_offers_only_unused_passes() {
        let mut card = ScoreCard::new();
        for color in Color::ROWS {
            card.apply(cross(color, 10)).unwrap();
        }
        card.apply(Action::Pass(1)).unwrap();
        card.start_new_round();

        let mask = card.legal_mask(&DicePool::from_faces([3; 6]), TOSSER_SECOND);
        assert_eq!(mask.indices().collect::<Vec<_>>(), vec![44, 46, 47]);
    }

    #[test]
    fn test_tosser_who_crossed_gets_noops_not_passes() {
        let mut card = ScoreCard::new();
        card.apply(cross(Color::Red, 0)).unwrap();
        let mask = card.legal_mask(&DicePool::from_faces([4; 6]), TOSSER_SECOND);
        assert!(mask.contains(NOOP_OFFSET));
        assert!(!mask.contains(PASS_OFFSET));
    }

    #[test]
    fn test_grid_layout() {
        let mut card = ScoreCard::new();
        card.apply(cross(Color::Blue, 3)).unwrap();
        card.apply(Action::Pass(2)).unwrap();
        let grid = card.grid();
        assert_eq!(grid[3][3], 1);
        assert_eq!(grid[4], [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let total: u32 = grid.iter().flatten().map(|c| u32::from(*c)).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_card_serialization() {
        let mut card = ScoreCard::new();
        card.apply(cross(Color::Yellow, 1)).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let back: ScoreCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
