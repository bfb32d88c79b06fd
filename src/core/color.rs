//! Die and row colors.
//!
//! The four row colors double as score-sheet row indices in the fixed order
//! RED, YELLOW, GREEN, BLUE. RED and YELLOW rows run 2→12, GREEN and BLUE run
//! 12→2.

use serde::{Deserialize, Serialize};

/// Number of colored score rows.
pub const ROW_COUNT: usize = 4;

/// Color of a die or score row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    /// The two shared dice that belong to no row.
    Neutral,
}

impl Color {
    /// Row colors in row-index order.
    pub const ROWS: [Color; ROW_COUNT] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// Row index of this color, `None` for neutral dice.
    #[must_use]
    pub const fn row_index(self) -> Option<usize> {
        match self {
            Color::Red => Some(0),
            Color::Yellow => Some(1),
            Color::Green => Some(2),
            Color::Blue => Some(3),
            Color::Neutral => None,
        }
    }

    /// Row color at `index`, if any.
    #[must_use]
    pub fn from_row_index(index: usize) -> Option<Color> {
        Self::ROWS.get(index).copied()
    }

    /// Whether this row is played low-to-high (2 first).
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Color::Red | Color::Yellow)
    }

    /// Column of the cell showing dice total `sum` in this row.
    ///
    /// `sum` must lie in `2..=12`; ascending rows map it to `sum - 2`,
    /// descending rows to `12 - sum`.
    #[must_use]
    pub fn column_for_sum(self, sum: u8) -> usize {
        debug_assert!((2..=12).contains(&sum), "dice sum out of range: {}", sum);
        if self.is_ascending() {
            (sum - 2) as usize
        } else {
            (12 - sum) as usize
        }
    }

    /// Number printed in the cell at `column` of this row.
    #[must_use]
    pub fn value_at(self, column: usize) -> u8 {
        if self.is_ascending() {
            column as u8 + 2
        } else {
            12 - column as u8
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Neutral => "NEUTRAL",
        };
        f.write_str(name)
    }
}

/// A set of row colors, stored as a 4-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSet(u8);

impl ColorSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a row color. Neutral is ignored.
    pub fn insert(&mut self, color: Color) {
        if let Some(row) = color.row_index() {
            self.0 |= 1 << row;
        }
    }

    #[must_use]
    pub fn contains(self, color: Color) -> bool {
        color.row_index().map_or(false, |row| self.0 & (1 << row) != 0)
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 | other.0)
    }

    /// Colors in row-index order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ROWS.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_indices() {
        for (i, color) in Color::ROWS.iter().enumerate() {
            assert_eq!(color.row_index(), Some(i));
            assert_eq!(Color::from_row_index(i), Some(*color));
        }
        assert_eq!(Color::Neutral.row_index(), None);
        assert_eq!(Color::from_row_index(4), None);
    }

    #[test]
    fn test_column_for_sum_direction() {
        assert_eq!(Color::Red.column_for_sum(2), 0);
        assert_eq!(Color::Yellow.column_for_sum(12), 10);
        assert_eq!(Color::Green.column_for_sum(12), 0);
        assert_eq!(Color::Blue.column_for_sum(2), 10);
        assert_eq!(Color::Green.column_for_sum(7), 5);
    }

    #[test]
    fn test_value_at_inverts_column_for_sum() {
        for color in Color::ROWS {
            for sum in 2..=12u8 {
                assert_eq!(color.value_at(color.column_for_sum(sum)), sum);
            }
        }
    }

    #[test]
    fn test_color_set() {
        let mut set = ColorSet::empty();
        assert!(set.is_empty());

        set.insert(Color::Green);
        set.insert(Color::Green);
        set.insert(Color::Neutral);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Color::Green));
        assert!(!set.contains(Color::Neutral));

        let other: ColorSet = [Color::Red, Color::Green].into_iter().collect();
        let both = set.union(other);
        assert_eq!(both.iter().collect::<Vec<_>>(), vec![Color::Red, Color::Green]);
    }
}
