//! Dice: six shared dice, four colored and two neutral.
//!
//! Dice change only through a reroll of the whole pool.

mod die;
mod pool;

pub use die::Die;
pub use pool::{DicePool, DICE_COUNT};
