//! Policy trait and scripted baselines.

use crate::core::{ActionMask, GameRng, NOOP_OFFSET, PASS_OFFSET};

/// Picks one action index from a legal mask.
pub trait Policy: Send + Sync {
    /// `None` only when the mask is empty.
    fn choose(&self, mask: ActionMask, rng: &mut GameRng) -> Option<usize>;
}

/// Always takes the smallest legal index.
///
/// Value cells come first in the action space, so this crosses whenever it
/// can and otherwise passes before doing nothing.
#[derive(Clone, Debug, Default)]
pub struct LowestIndexPolicy;

impl Policy for LowestIndexPolicy {
    fn choose(&self, mask: ActionMask, _rng: &mut GameRng) -> Option<usize> {
        mask.first()
    }
}

/// Like [`LowestIndexPolicy`], but avoids passing while anything else is
/// legal by falling back to the largest legal index.
///
/// Keeps scripted opponents from burning their pass slots and ending games
/// before rows can be closed.
#[derive(Clone, Debug, Default)]
pub struct LongPlayingPolicy;

impl Policy for LongPlayingPolicy {
    fn choose(&self, mask: ActionMask, _rng: &mut GameRng) -> Option<usize> {
        let first = mask.first()?;
        if (PASS_OFFSET..NOOP_OFFSET).contains(&first) {
            return mask.last();
        }
        Some(first)
    }
}

/// Uniform over legal indices.
#[derive(Clone, Debug, Default)]
pub struct UniformRandomPolicy;

impl Policy for UniformRandomPolicy {
    fn choose(&self, mask: ActionMask, rng: &mut GameRng) -> Option<usize> {
        let legal: Vec<usize> = mask.indices().collect();
        rng.choose(&legal).copied()
    }
}
