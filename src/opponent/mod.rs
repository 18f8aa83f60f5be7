//! Opponent policies.
//!
//! - `OpponentPolicy`: The decision seam for the scripted side
//! - `ScriptedOpponent`: The reference greedy policy
//! - `RandomOpponent`: Uniform random legal choices, for simulations

mod policy;

pub use policy::{AttackPlan, OpponentPolicy, RandomOpponent, ScriptedOpponent};
