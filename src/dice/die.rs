//! A single colored die.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameRng, DIE_FACES};

/// A single six-sided die with a color tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    color: Color,
    face: u8,
}

impl Die {
    /// A die showing 1.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color, face: 1 }
    }

    /// A die showing `face`.
    ///
    /// `face` must lie in `1..=6`; debug builds panic otherwise, release
    /// builds clamp.
    #[must_use]
    pub fn with_face(color: Color, face: u8) -> Self {
        debug_assert!(
            (1..=DIE_FACES).contains(&face),
            "die face out of range: {}",
            face
        );
        Self {
            color,
            face: face.clamp(1, DIE_FACES),
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn face(&self) -> u8 {
        self.face
    }

    pub(crate) fn roll(&mut self, rng: &mut GameRng) {
        self.face = rng.roll_die();
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.color, self.face)
    }
}
