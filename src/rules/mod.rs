//! Game rules: turn engine, combat resolver, card deployment.
//!
//! These are plain functions over `&mut GameState`. They validate their own
//! preconditions (card location, readiness, cost) and return `ActionError`
//! without mutating state when a request is illegal. Turn gating (whose turn
//! it is, the opponent-processing flag) belongs to the caller; see
//! `games::pixel_forge`.
//!
//! `RulesEngine` is the action-level trait over a whole game.

pub mod combat;
pub mod engine;
pub mod play;
pub mod turn;

pub use combat::{destroy_card, resolve_attack, validate_attack, validate_attacker, AttackOutcome};
pub use engine::{GameResult, RulesEngine};
pub use play::{play_card, validate_play};
pub use turn::{begin_turn, check_winner, draw_card};
