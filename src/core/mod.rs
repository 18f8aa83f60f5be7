//! Core engine types: instance ids, sides, state, actions, RNG, configuration.
//!
//! Everything here is rules-agnostic plumbing. The rules themselves live in
//! `rules`, and the game wiring lives in `games::pixel_forge`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod log;
pub mod state;

pub use entity::{InstanceId, InstanceIdAllocator};
pub use player::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PixelRefill};
pub use action::{Action, ActionRecord};
pub use log::GameLog;
pub use state::{CombatPhase, GameState, PlayerState, TurnPhase, TurnStep};
