//! Score sheets: four colored rows with lock cells, plus four pass slots.
//!
//! A sheet knows nothing about other players. Cross-player row closures are
//! layered on by the board.

mod card;
mod row;

pub use card::{CardUpdate, Grid, ScoreCard, TurnView, GRID_COLUMNS, GRID_ROWS, PASS_PENALTY};
pub use row::{Row, CELLS_TO_LOCK, LAST_COLUMN, LOCK_COLUMN};
