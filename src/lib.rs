//! # pixel-forge
//!
//! Turn and combat engine for Pixel Forge, a two-player card battle between
//! a human side and a scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Single Owned State**: One `GameState` value per match, mutated
//!    through explicit entry points under a turn gate. No globals.
//!
//! 2. **Deterministic**: Deck building, shuffles, and opponent decisions
//!    draw from seeded `GameRng` streams. Same seed and same inputs produce
//!    the same game.
//!
//! 3. **Presentation-Agnostic**: The engine narrates into an in-state log and
//!    exposes a serializable snapshot. Rendering and pacing belong to the
//!    caller.
//!
//! ## Architecture
//!
//! - **Tagged Abilities**: Card abilities are `AbilityEffect` variants in a
//!   plain registry keyed by card definition id.
//!
//! - **Stepped Opponent Turn**: The opponent's turn is a sequence of
//!   discrete `TurnStep`s. `end_turn` runs them all; a presentation layer can
//!   pace them with `advance_opponent_turn`.
//!
//! - **Persistent Data Structures**: The log and action history use `im-rs`
//!   so snapshots clone cheaply.
//!
//! ## Modules
//!
//! - `core`: Instance ids, sides, state, actions, log, RNG, configuration
//! - `cards`: Card definitions, instances, catalog, deck factory
//! - `zones`: Per-side deck, hand, field, graveyard
//! - `effects`: Ability effects and their resolution
//! - `triggers`: Lifecycle events and the ability registry
//! - `rules`: Turn engine, combat resolver, card deployment, `RulesEngine`
//! - `opponent`: Opponent decision policies
//! - `games`: The Pixel Forge game wiring
//!
//! ## Example
//!
//! ```
//! use pixel_forge::{PixelForgeBuilder, RulesEngine, Side};
//!
//! let (game, mut state) = PixelForgeBuilder::new().build(42);
//!
//! // Play the first affordable card, if any
//! let playable = state.player().playable().next().map(|c| c.instance_id);
//! if let Some(card) = playable {
//!     game.play_card(&mut state, card).unwrap();
//! }
//!
//! game.end_turn(&mut state).unwrap();
//! assert_eq!(state.turn_count, 2);
//! assert!(game.legal_actions(&state, Side::Player).len() >= 2);
//! ```

pub mod core;
pub mod error;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod triggers;
pub mod opponent;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, InstanceIdAllocator,
    Side, SideMap,
    GameRng, GameRngState,
    GameConfig, PixelRefill,
    Action, ActionRecord,
    GameLog,
    CombatPhase, GameState, PlayerState, TurnPhase, TurnStep,
};

pub use crate::error::{ActionError, CatalogError, ConfigError};

pub use crate::zones::{PlayerZones, Zone, ZonePosition};

pub use crate::cards::{build_deck, CardCatalog, CardDefinition, CardId, CardInstance, Rarity};

pub use crate::rules::{AttackOutcome, GameResult, RulesEngine};

pub use crate::effects::{AbilityEffect, EffectResolver, ResolveResult};

pub use crate::triggers::{AbilityHandlers, AbilityRegistry, TriggerEvent};

pub use crate::opponent::{AttackPlan, OpponentPolicy, RandomOpponent, ScriptedOpponent};

pub use crate::games::{PixelForge, PixelForgeBuilder};
