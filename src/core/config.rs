//! Game configuration.
//!
//! A game is configured by its ordered player list and a dice seed. Board
//! geometry (four rows, eleven value cells, four pass slots) is fixed.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported table; seats are `u8`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Configuration for a single game.
///
/// Player order in `player_names` is the turn rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_names: Vec<String>,
    /// Seed for the dice stream.
    pub seed: u64,
}

impl GameConfig {
    #[must_use]
    pub fn new(player_names: Vec<String>, seed: u64) -> Self {
        Self { player_names, seed }
    }

    /// `player_1`, `player_2`, ... for a table of `count`.
    #[must_use]
    pub fn numbered(count: usize, seed: u64) -> Self {
        Self::new((1..=count).map(|i| format!("player_{}", i)).collect(), seed)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Reject empty tables, duplicate names and oversize tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_names.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_names.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: self.player_names.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for name in &self.player_names {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicatePlayer(name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::numbered(2, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_names, vec!["player_1", "player_2"]);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        let config = GameConfig::new(vec![], 1);
        assert_eq!(config.validate(), Err(ConfigError::NoPlayers));
    }

    #[test]
    fn test_duplicates_rejected() {
        let config = GameConfig::new(vec!["a".into(), "b".into(), "a".into()], 1);
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePlayer("a".into())));
    }

    #[test]
    fn test_too_many_rejected() {
        let config = GameConfig::numbered(MAX_PLAYERS + 1, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyPlayers { max: 255, got: 256 })
        );
        assert!(GameConfig::numbered(MAX_PLAYERS, 1).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::numbered(3, 99);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
