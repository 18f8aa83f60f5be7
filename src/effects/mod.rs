//! Effect system for card abilities.
//!
//! ## Key Types
//!
//! - `AbilityEffect`: An atomic ability outcome (return to hand, destroy, ...)
//! - `EffectResolver`: Applies an effect to game state and narrates it

pub mod effect;
pub mod resolver;

pub use effect::AbilityEffect;
pub use resolver::{EffectResolver, ResolveResult};
