//! Per-player observation.

use serde::{Deserialize, Serialize};

use crate::core::{ActionMask, PlayerId, ACTION_SPACE_SIZE};
use crate::scorecard::Grid;

/// What one player sees: their own sheet and their legal actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub player: PlayerId,
    /// 5×12 grid: RED, YELLOW, GREEN, BLUE rows (11 value cells + lock),
    /// then the pass row.
    pub grid: Grid,
    pub legal_mask: ActionMask,
}

impl Observation {
    /// The mask as a 55-element 0/1 vector.
    #[must_use]
    pub fn legal_vector(&self) -> [u8; ACTION_SPACE_SIZE] {
        self.legal_mask.to_array()
    }

    /// Row-major flattening of the grid.
    #[must_use]
    pub fn flat_grid(&self) -> Vec<u8> {
        self.grid.iter().flatten().copied().collect()
    }
}
