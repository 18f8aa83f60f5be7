//! Trigger system for card abilities.
//!
//! Cards respond to three lifecycle events: being played, dying in combat,
//! and killing a combat target. The [`AbilityRegistry`] maps a card
//! definition id to an [`AbilityHandlers`] value holding at most one
//! [`AbilityEffect`](crate::effects::AbilityEffect) per event.
//!
//! ## Example Usage
//!
//! ```
//! use pixel_forge::cards::CardId;
//! use pixel_forge::effects::AbilityEffect;
//! use pixel_forge::triggers::{AbilityHandlers, AbilityRegistry, TriggerEvent};
//!
//! let mut registry = AbilityRegistry::reference();
//!
//! // A custom card that hits the opposing side when it dies
//! registry.register(
//!     "bomb-999",
//!     AbilityHandlers::new().with_on_death(AbilityEffect::BonusDamage(3)),
//! );
//!
//! let effect = registry.handler(&CardId::new("bomb-999"), TriggerEvent::OnDeath);
//! assert_eq!(effect, Some(&AbilityEffect::BonusDamage(3)));
//! ```

mod event;
mod registry;

pub use event::TriggerEvent;
pub use registry::{AbilityHandlers, AbilityRegistry};
