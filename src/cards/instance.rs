//! Card instances - runtime card state.
//!
//! `CardInstance` is one specific copy of a card during a game. It carries
//! its definition by value plus the mutable combat state: current health and
//! the two attack-availability flags.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::entity::InstanceId;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub instance_id: InstanceId,

    /// The catalog definition, by value.
    pub definition: CardDefinition,

    /// Current health, floor 0.
    pub current_health: u32,

    /// May attack this turn (false the turn it enters the field).
    pub can_attack: bool,

    /// Has already attacked this turn.
    pub has_attacked: bool,
}

impl CardInstance {
    /// Create a fresh instance at full health that cannot attack.
    #[must_use]
    pub fn new(instance_id: InstanceId, definition: CardDefinition) -> Self {
        Self {
            instance_id,
            current_health: definition.health,
            definition,
            can_attack: false,
            has_attacked: false,
        }
    }

    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn strength(&self) -> u32 {
        self.definition.strength
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.pixels_cost
    }

    /// Legal attacker right now: ready and not yet used this turn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.can_attack && !self.has_attacked
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    /// Health left after taking `amount` damage, floor 0. Does not mutate.
    #[must_use]
    pub fn health_after(&self, amount: u32) -> u32 {
        self.current_health.saturating_sub(amount)
    }

    /// Mark as having used its attack this turn.
    pub fn exhaust(&mut self) {
        self.has_attacked = true;
        self.can_attack = false;
    }

    /// Start-of-turn reset for field cards.
    pub fn ready(&mut self) {
        self.can_attack = true;
        self.has_attacked = false;
    }

    /// Reset attack flags for a card entering the field or hand.
    pub fn summon_sick(&mut self) {
        self.can_attack = false;
        self.has_attacked = false;
    }

    /// Restore current health to the definition's base health.
    pub fn restore_health(&mut self) {
        self.current_health = self.definition.health;
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}/{}]",
            self.definition.name, self.definition.strength, self.current_health
        )
    }
}
