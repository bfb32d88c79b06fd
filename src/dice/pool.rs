//! The six shared dice and their sums.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::die::Die;
use crate::core::{Color, GameRng};

/// Dice in a pool: one per row color plus two neutral.
pub const DICE_COUNT: usize = 6;

const NEUTRAL_A: usize = 4;
const NEUTRAL_B: usize = 5;

/// The shared dice, in the order RED, YELLOW, GREEN, BLUE, NEUTRAL, NEUTRAL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePool {
    dice: [Die; DICE_COUNT],
}

impl DicePool {
    /// A pool with every die showing 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_faces([1; DICE_COUNT])
    }

    /// A pool with fixed faces, in pool order.
    ///
    /// ```
    /// use qwixx_engine::dice::DicePool;
    ///
    /// let pool = DicePool::from_faces([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(pool.white_sum(), 11);
    /// ```
    #[must_use]
    pub fn from_faces(faces: [u8; DICE_COUNT]) -> Self {
        let colors = [
            Color::Red,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Neutral,
            Color::Neutral,
        ];
        Self {
            dice: std::array::from_fn(|i| Die::with_face(colors[i], faces[i])),
        }
    }

    /// Reroll all six dice independently.
    pub fn roll_all(&mut self, rng: &mut GameRng) {
        for die in &mut self.dice {
            die.roll(rng);
        }
        trace!(faces = ?self.faces(), "dice rolled");
    }

    /// Sum of the two neutral dice.
    #[must_use]
    pub fn white_sum(&self) -> u8 {
        self.dice[NEUTRAL_A].face() + self.dice[NEUTRAL_B].face()
    }

    /// Both neutral-plus-colored sums for a row color.
    ///
    /// Returns `None` for the neutral color, which has no die of its own.
    #[must_use]
    pub fn colored_candidates(&self, color: Color) -> Option<[u8; 2]> {
        let colored = self.dice[color.row_index()?].face();
        Some([
            self.dice[NEUTRAL_A].face() + colored,
            self.dice[NEUTRAL_B].face() + colored,
        ])
    }

    #[must_use]
    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    /// Current faces in pool order.
    #[must_use]
    pub fn faces(&self) -> [u8; DICE_COUNT] {
        std::array::from_fn(|i| self.dice[i].face())
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_layout() {
        let pool = DicePool::new();
        let colors: Vec<_> = pool.dice().iter().map(Die::color).collect();
        assert_eq!(
            colors,
            vec![
                Color::Red,
                Color::Yellow,
                Color::Green,
                Color::Blue,
                Color::Neutral,
                Color::Neutral
            ]
        );
        assert_eq!(pool.faces(), [1; 6]);
    }

    #[test]
    fn test_white_sum() {
        let pool = DicePool::from_faces([6, 6, 6, 6, 2, 3]);
        assert_eq!(pool.white_sum(), 5);
    }

    #[test]
    fn test_colored_candidates() {
        let pool = DicePool::from_faces([1, 2, 3, 4, 5, 6]);
        assert_eq!(pool.colored_candidates(Color::Red), Some([6, 7]));
        assert_eq!(pool.colored_candidates(Color::Blue), Some([9, 10]));
        assert_eq!(pool.colored_candidates(Color::Neutral), None);

        let same = DicePool::from_faces([4, 4, 4, 4, 4, 4]);
        assert_eq!(same.colored_candidates(Color::Green), Some([8, 8]));
    }

    #[test]
    fn test_roll_all_is_seeded() {
        let mut a = DicePool::new();
        let mut b = DicePool::new();
        let mut rng_a = GameRng::new(5);
        let mut rng_b = GameRng::new(5);
        for _ in 0..10 {
            a.roll_all(&mut rng_a);
            b.roll_all(&mut rng_b);
            assert_eq!(a, b);
            assert!(a.faces().iter().all(|f| (1..=6).contains(f)));
        }
    }
}
