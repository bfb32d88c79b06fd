//! Player identification and per-player storage.
//!
//! Seats are numbered in rotation order: `PlayerId(0)` acts first in every
//! round, `PlayerId(n - 1)` closes each pass through the rotation.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player, 0-based, in turn-rotation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use qwixx_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Seat of the player at `index` in rotation order.
    #[must_use]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data with O(1) access by `PlayerId`.
///
/// ```
/// use qwixx_engine::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<i32> = PlayerMap::with_value(2, 0);
/// points[PlayerId::new(1)] += 6;
/// assert_eq!(points.values().copied().collect::<Vec<_>>(), vec![0, 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one entry per seat, built by `factory`.
    ///
    /// Player counts are validated by `GameConfig` before any map is built.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        debug_assert!(player_count <= u8::MAX as usize);
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a map with every entry set to `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a map of default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by applying `f` to every entry.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }

    /// Reset every entry to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.iter_mut().for_each(|v| *v = value.clone());
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
        assert!(PlayerId::new(0) < p1);
    }

    #[test]
    fn test_player_map_new_and_index() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 5);
        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 10);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_get_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::with_value(2, 7);
        assert_eq!(map.get(PlayerId::new(1)), Some(&7));
        assert_eq!(map.get(PlayerId::new(2)), None);
    }

    #[test]
    fn test_player_map_map_and_fill() {
        let mut map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![2, 4]);

        map.fill(0);
        assert!(map.values().all(|v| *v == 0));
    }

    #[test]
    fn test_player_map_iter_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::with_default(3);
        for (p, v) in map.iter_mut() {
            *v = p.index() as i32;
        }
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 - 5);
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
