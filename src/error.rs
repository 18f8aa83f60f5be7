//! Error types for the Pixel Forge engine.
//!
//! `ActionError` is the illegal-action family: a request made outside its
//! precondition. The engine rejects it without mutating state, narrates the
//! `Display` text into the game log, and returns it so callers may inspect
//! or ignore it. Catalog and configuration loading have their own errors.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::InstanceId;

/// An action requested outside its legal precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("The game is over.")]
    GameOver,

    #[error("It is not your turn.")]
    NotYourTurn,

    #[error("The opponent is still taking its turn.")]
    OpponentProcessing,

    #[error("Finish or cancel the pending attack first.")]
    CombatPending,

    #[error("No attacker has been selected.")]
    NoAttackerSelected,

    #[error("That card is not in your hand ({0}).")]
    NotInHand(InstanceId),

    #[error("Not enough pixels to play {name}: it costs {cost}, {available} available.")]
    InsufficientPixels {
        name: String,
        cost: u32,
        available: u32,
    },

    #[error("That card is not on the field ({0}).")]
    NotOnField(InstanceId),

    #[error("{name} cannot attack this turn.")]
    CannotAttack { name: String },

    #[error("That is not a valid attack target ({0}).")]
    InvalidTarget(InstanceId),

    #[error("You can only attack directly when the enemy field is empty.")]
    FieldNotEmpty,
}

/// Failure to load or validate a card catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Card {0} is defined more than once")]
    DuplicateCard(CardId),

    #[error("Card {id} is invalid: {reason}")]
    InvalidCard { id: CardId, reason: String },
}

/// Invalid game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T, E = ActionError> = std::result::Result<T, E>;
