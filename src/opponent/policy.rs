//! Opponent decision policies.
//!
//! A policy reads the game state and answers two questions for the side it
//! controls: which card to play (at most one per turn), and which attack to
//! make next. The engine asks for an attack once per allowed attack, so a
//! policy always sees the state left by the previous attack.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, InstanceId, Side};

/// A chosen attack: the attacker and its target (`None` = direct).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackPlan {
    pub attacker: InstanceId,
    pub target: Option<InstanceId>,
}

/// Policy for the scripted side.
///
/// Implementations must only return cards the side can legally use: a
/// playable hand card, a ready field card, a target on the opposing field.
pub trait OpponentPolicy: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Choose a hand card to play, or `None` to skip the play phase.
    fn choose_play(&self, state: &GameState, side: Side, rng: &mut GameRng) -> Option<InstanceId>;

    /// Choose the next attack, or `None` to stop attacking.
    fn choose_attack(&self, state: &GameState, side: Side, rng: &mut GameRng) -> Option<AttackPlan>;
}

/// The reference opponent.
///
/// - Plays the most expensive affordable card (first one on ties)
/// - Attacks with the first ready field card
/// - Targets the opposing field card with the lowest current health (first
///   one on ties), or attacks directly if the opposing field is empty
#[derive(Clone, Debug, Default)]
pub struct ScriptedOpponent;

impl OpponentPolicy for ScriptedOpponent {
    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_play(&self, state: &GameState, side: Side, _rng: &mut GameRng) -> Option<InstanceId> {
        state
            .side(side)
            .playable()
            .reduce(|best, card| if card.cost() > best.cost() { card } else { best })
            .map(|card| card.instance_id)
    }

    fn choose_attack(&self, state: &GameState, side: Side, _rng: &mut GameRng) -> Option<AttackPlan> {
        let attacker = state.side(side).ready_attackers().next()?;
        let target = state
            .side(side.opposing())
            .field()
            .iter()
            .min_by_key(|card| card.current_health)
            .map(|card| card.instance_id);

        Some(AttackPlan {
            attacker: attacker.instance_id,
            target,
        })
    }
}

/// Uniform random opponent.
///
/// Picks uniformly among the playable cards plus "skip", and among every
/// ready attacker paired with every opposing field card (or a direct attack
/// when that field is empty).
/// Draws only from the policy RNG stream, so games stay reproducible.
#[derive(Clone, Debug, Default)]
pub struct RandomOpponent;

impl OpponentPolicy for RandomOpponent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_play(&self, state: &GameState, side: Side, rng: &mut GameRng) -> Option<InstanceId> {
        let playable: Vec<InstanceId> = state.side(side).playable().map(|c| c.instance_id).collect();
        let choice = rng.gen_range_usize(0..playable.len() + 1);
        playable.get(choice).copied()
    }

    fn choose_attack(&self, state: &GameState, side: Side, rng: &mut GameRng) -> Option<AttackPlan> {
        let enemy_field = state.side(side.opposing()).field();
        let targets: Vec<Option<InstanceId>> = if enemy_field.is_empty() {
            vec![None]
        } else {
            enemy_field.iter().map(|c| Some(c.instance_id)).collect()
        };

        let plans: Vec<AttackPlan> = state
            .side(side)
            .ready_attackers()
            .flat_map(|attacker| {
                targets.iter().map(move |&target| AttackPlan {
                    attacker: attacker.instance_id,
                    target,
                })
            })
            .collect();

        rng.choose(&plans).copied()
    }
}
