//! Ability registry.
//!
//! Maps card definition ids to their handlers, one optional effect per
//! lifecycle event. The engine fires an event for a card by looking up the
//! card's definition id; a missing entry or missing handler is a no-op.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance};
use crate::core::{GameState, Side};
use crate::effects::{AbilityEffect, EffectResolver, ResolveResult};

use super::event::TriggerEvent;

/// Handlers for one card definition.
///
/// ```
/// use pixel_forge::effects::AbilityEffect;
/// use pixel_forge::triggers::{AbilityHandlers, TriggerEvent};
///
/// let handlers = AbilityHandlers::new().with_on_kill(AbilityEffect::BonusDamage(2));
///
/// assert_eq!(handlers.handler(TriggerEvent::OnKill), Some(&AbilityEffect::BonusDamage(2)));
/// assert_eq!(handlers.handler(TriggerEvent::OnDeath), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityHandlers {
    pub on_play: Option<AbilityEffect>,
    pub on_death: Option<AbilityEffect>,
    pub on_kill: Option<AbilityEffect>,
}

impl AbilityHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_on_play(mut self, effect: AbilityEffect) -> Self {
        self.on_play = Some(effect);
        self
    }

    #[must_use]
    pub fn with_on_death(mut self, effect: AbilityEffect) -> Self {
        self.on_death = Some(effect);
        self
    }

    #[must_use]
    pub fn with_on_kill(mut self, effect: AbilityEffect) -> Self {
        self.on_kill = Some(effect);
        self
    }

    /// The handler for an event, if any.
    #[must_use]
    pub fn handler(&self, event: TriggerEvent) -> Option<&AbilityEffect> {
        match event {
            TriggerEvent::OnPlay => self.on_play.as_ref(),
            TriggerEvent::OnDeath => self.on_death.as_ref(),
            TriggerEvent::OnKill => self.on_kill.as_ref(),
        }
    }
}

/// Registry of card abilities, keyed by definition id.
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    handlers: FxHashMap<CardId, AbilityHandlers>,
}

impl AbilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The abilities of the bundled reference catalog.
    ///
    /// - `link-001`: returns to hand when it dies
    /// - `luigi-002`: shuffles itself into the deck and draws 3 when played
    /// - `joel-008`: deals 2 damage to the opposing side when it kills
    /// - `ori-017`: destroys the first opposing field card when it dies
    #[must_use]
    pub fn reference() -> Self {
        let mut registry = Self::new();
        registry.register(
            "link-001",
            AbilityHandlers::new().with_on_death(AbilityEffect::ReturnToHand),
        );
        registry.register(
            "luigi-002",
            AbilityHandlers::new().with_on_play(AbilityEffect::ShuffleIntoDeckAndDraw(3)),
        );
        registry.register(
            "joel-008",
            AbilityHandlers::new().with_on_kill(AbilityEffect::BonusDamage(2)),
        );
        registry.register(
            "ori-017",
            AbilityHandlers::new().with_on_death(AbilityEffect::DestroyFirstEnemy),
        );
        registry
    }

    /// Register handlers for a card, replacing any previous entry.
    ///
    /// Returns the replaced handlers, if any.
    pub fn register(&mut self, id: impl Into<CardId>, handlers: AbilityHandlers) -> Option<AbilityHandlers> {
        self.handlers.insert(id.into(), handlers)
    }

    /// Remove a card's handlers.
    pub fn unregister(&mut self, id: &CardId) -> Option<AbilityHandlers> {
        self.handlers.remove(id)
    }

    /// All handlers for a card.
    #[must_use]
    pub fn handlers(&self, id: &CardId) -> Option<&AbilityHandlers> {
        self.handlers.get(id)
    }

    /// The handler for one event of a card.
    #[must_use]
    pub fn handler(&self, id: &CardId, event: TriggerEvent) -> Option<&AbilityEffect> {
        self.handlers.get(id)?.handler(event)
    }

    /// Number of cards with registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Fire `event` for `card`, owned by `owner`.
    ///
    /// Returns `None` if the card has no handler for the event.
    pub fn fire(
        &self,
        state: &mut GameState,
        card: &CardInstance,
        owner: Side,
        event: TriggerEvent,
    ) -> Option<ResolveResult> {
        let effect = self.handler(card.card_id(), event)?;
        log::debug!("{} fires {} for {}", card.name(), event, owner);
        Some(EffectResolver::resolve(state, effect, card, owner))
    }
}
