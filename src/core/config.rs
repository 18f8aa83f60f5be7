//! Game configuration.
//!
//! Games are configured at startup via `GameConfig`. Every field has a
//! default that reproduces the reference rules, so a partial JSON document
//! only needs to name what it changes.
//!
//! ## Example
//!
//! ```
//! use pixel_forge::core::{GameConfig, PixelRefill};
//!
//! let config = GameConfig::default()
//!     .with_deck_size(20)
//!     .with_refill(PixelRefill::RefillToMax, PixelRefill::RefillToMax);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.starting_health, 20);
//! ```

use serde::{Deserialize, Serialize};

use super::player::{Side, SideMap};
use crate::error::ConfigError;

/// How a side's current pixels change at the start of its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelRefill {
    /// Current pixels grow by exactly one.
    Increment,
    /// Current pixels are refilled to the new maximum.
    RefillToMax,
}

/// Complete game configuration.
///
/// The default pixel refill rules are asymmetric (player `Increment`,
/// opponent `RefillToMax`) as in the reference game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health each side starts with.
    pub starting_health: u32,

    /// Cards dealt from the deck into each hand at game start.
    pub starting_hand_size: usize,

    /// Cards built into each deck (before the starting hand is dealt).
    pub deck_size: usize,

    /// Current and max pixels each side starts with.
    pub starting_pixels: u32,

    /// Upper bound for max pixels.
    pub pixel_cap: u32,

    /// Turn-start pixel rule per side.
    pub refill: SideMap<PixelRefill>,

    /// How many attacks the opponent makes per turn at most.
    pub opponent_attacks_per_turn: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 20,
            starting_hand_size: 3,
            deck_size: 15,
            starting_pixels: 1,
            pixel_cap: 10,
            refill: SideMap::new(|side| match side {
                Side::Player => PixelRefill::Increment,
                Side::Opponent => PixelRefill::RefillToMax,
            }),
            opponent_attacks_per_turn: 1,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health == 0 {
            return Err(ConfigError::InvalidValue {
                field: "starting_health",
                reason: "must be positive".to_string(),
            });
        }
        if self.pixel_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pixel_cap",
                reason: "must be positive".to_string(),
            });
        }
        if self.starting_pixels > self.pixel_cap {
            return Err(ConfigError::InvalidValue {
                field: "starting_pixels",
                reason: format!("{} exceeds pixel_cap {}", self.starting_pixels, self.pixel_cap),
            });
        }
        if self.starting_hand_size > self.deck_size {
            return Err(ConfigError::InvalidValue {
                field: "starting_hand_size",
                reason: format!("{} exceeds deck_size {}", self.starting_hand_size, self.deck_size),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_pixels(mut self, pixels: u32) -> Self {
        self.starting_pixels = pixels;
        self
    }

    #[must_use]
    pub fn with_pixel_cap(mut self, cap: u32) -> Self {
        self.pixel_cap = cap;
        self
    }

    /// Set the turn-start pixel rule for each side.
    #[must_use]
    pub fn with_refill(mut self, player: PixelRefill, opponent: PixelRefill) -> Self {
        self.refill[Side::Player] = player;
        self.refill[Side::Opponent] = opponent;
        self
    }

    #[must_use]
    pub fn with_opponent_attacks_per_turn(mut self, attacks: usize) -> Self {
        self.opponent_attacks_per_turn = attacks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_rules() {
        let config = GameConfig::default();

        assert_eq!(config.starting_health, 20);
        assert_eq!(config.starting_hand_size, 3);
        assert_eq!(config.deck_size, 15);
        assert_eq!(config.starting_pixels, 1);
        assert_eq!(config.pixel_cap, 10);
        assert_eq!(config.refill[Side::Player], PixelRefill::Increment);
        assert_eq!(config.refill[Side::Opponent], PixelRefill::RefillToMax);
        assert_eq!(config.opponent_attacks_per_turn, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "deck_size": 10 }"#).unwrap();

        assert_eq!(config.deck_size, 10);
        assert_eq!(config.starting_health, 20);
        assert_eq!(config.pixel_cap, 10);
    }

    #[test]
    fn test_refill_json_names() {
        let json = r#"{ "refill": { "player": "refill_to_max", "opponent": "increment" } }"#;
        let config = GameConfig::from_json(json).unwrap();

        assert_eq!(config.refill[Side::Player], PixelRefill::RefillToMax);
        assert_eq!(config.refill[Side::Opponent], PixelRefill::Increment);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GameConfig::default().with_starting_health(0).validate().is_err());
        assert!(GameConfig::default().with_pixel_cap(0).validate().is_err());
        assert!(GameConfig::default()
            .with_starting_pixels(11)
            .validate()
            .is_err());
        assert!(GameConfig::default()
            .with_deck_size(2)
            .validate()
            .is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
