//! Combat resolver.
//!
//! ## Card vs. card
//!
//! Damage is simultaneous and computed from pre-attack values: each card
//! loses the other's strength, floor 0. A surviving attacker is exhausted.
//! Dead combatants leave the field for their owner's graveyard with health 0,
//! then triggers fire in a fixed order:
//!
//! 1. target `OnDeath` (if the target died)
//! 2. attacker `OnKill` (if the target died and the attacker survived the
//!    exchange, even if step 1 removed it from the field)
//! 3. attacker `OnDeath` (if the attacker died)
//!
//! ## Direct
//!
//! With no target the defending side loses the attacker's strength. Direct
//! attacks are only legal while the defending field is empty.

use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::{GameState, InstanceId, Side};
use crate::error::{ActionError, Result};
use crate::triggers::{AbilityRegistry, TriggerEvent};
use crate::zones::{Zone, ZonePosition};

use super::turn::check_winner;

/// What an attack did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: InstanceId,
    /// `None` for a direct attack.
    pub target: Option<InstanceId>,
    /// Damage the attacker dealt to the target card or defending side.
    pub damage_dealt: u32,
    /// Damage the attacker took back (0 for direct attacks).
    pub damage_taken: u32,
    /// Combatants destroyed by the exchange, target first.
    pub casualties: SmallVec<[InstanceId; 2]>,
}

impl AttackOutcome {
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.target.is_none()
    }

    #[must_use]
    pub fn attacker_died(&self) -> bool {
        self.casualties.contains(&self.attacker)
    }

    #[must_use]
    pub fn target_died(&self) -> bool {
        self.target.map_or(false, |t| self.casualties.contains(&t))
    }
}

/// Check that `side` may attack with `attacker`, regardless of target.
pub fn validate_attacker(state: &GameState, side: Side, attacker: InstanceId) -> Result<()> {
    if state.is_over() {
        return Err(ActionError::GameOver);
    }

    let card = state
        .side(side)
        .field_card(attacker)
        .ok_or(ActionError::NotOnField(attacker))?;
    if !card.is_ready() {
        return Err(ActionError::CannotAttack {
            name: card.name().to_string(),
        });
    }
    Ok(())
}

/// Check that `side` may attack with `attacker` against `target`.
pub fn validate_attack(
    state: &GameState,
    side: Side,
    attacker: InstanceId,
    target: Option<InstanceId>,
) -> Result<()> {
    validate_attacker(state, side, attacker)?;

    let defenders = state.side(side.opposing());
    match target {
        Some(target) if defenders.field_card(target).is_none() => Err(ActionError::InvalidTarget(target)),
        None if !defenders.field().is_empty() => Err(ActionError::FieldNotEmpty),
        _ => Ok(()),
    }
}

/// Resolve an attack by `side`'s `attacker` on `target`, or directly.
///
/// Validates first; an illegal attack returns the error without touching
/// state. Turn gating is the caller's concern.
pub fn resolve_attack(
    state: &mut GameState,
    abilities: &AbilityRegistry,
    side: Side,
    attacker: InstanceId,
    target: Option<InstanceId>,
) -> Result<AttackOutcome> {
    validate_attack(state, side, attacker, target)?;

    let outcome = match target {
        Some(target) => resolve_clash(state, abilities, side, attacker, target)?,
        None => resolve_direct(state, side, attacker)?,
    };

    check_winner(state);
    Ok(outcome)
}

fn resolve_clash(
    state: &mut GameState,
    abilities: &AbilityRegistry,
    side: Side,
    attacker_id: InstanceId,
    target_id: InstanceId,
) -> Result<AttackOutcome> {
    let defender = side.opposing();
    let attacker = state
        .side(side)
        .field_card(attacker_id)
        .cloned()
        .ok_or(ActionError::NotOnField(attacker_id))?;
    let target = state
        .side(defender)
        .field_card(target_id)
        .cloned()
        .ok_or(ActionError::InvalidTarget(target_id))?;

    state.narrate(format!(
        "{} ({}) attacks {} ({}).",
        attacker.name(),
        attacker.strength(),
        target.name(),
        target.strength()
    ));

    let attacker_health = attacker.health_after(target.strength());
    let target_health = target.health_after(attacker.strength());

    if let Some(card) = state.side_mut(side).zones.get_mut(Zone::Field, attacker_id) {
        card.current_health = attacker_health;
        card.exhaust();
    }
    if let Some(card) = state.side_mut(defender).zones.get_mut(Zone::Field, target_id) {
        card.current_health = target_health;
    }

    let mut casualties = SmallVec::new();
    let dead_target = if target_health == 0 {
        casualties.push(target_id);
        destroy_card(state, defender, target_id)
    } else {
        None
    };
    let dead_attacker = if attacker_health == 0 {
        casualties.push(attacker_id);
        destroy_card(state, side, attacker_id)
    } else {
        None
    };

    let survivor = if dead_attacker.is_none() {
        state.side(side).field_card(attacker_id).cloned()
    } else {
        None
    };

    if let Some(dead) = &dead_target {
        abilities.fire(state, dead, defender, TriggerEvent::OnDeath);

        if let Some(killer) = &survivor {
            abilities.fire(state, killer, side, TriggerEvent::OnKill);
        }
    }
    if let Some(dead) = &dead_attacker {
        abilities.fire(state, dead, side, TriggerEvent::OnDeath);
    }

    Ok(AttackOutcome {
        attacker: attacker_id,
        target: Some(target_id),
        damage_dealt: attacker.strength(),
        damage_taken: target.strength(),
        casualties,
    })
}

fn resolve_direct(state: &mut GameState, side: Side, attacker_id: InstanceId) -> Result<AttackOutcome> {
    let defender = side.opposing();
    let card = state
        .side_mut(side)
        .zones
        .get_mut(Zone::Field, attacker_id)
        .ok_or(ActionError::NotOnField(attacker_id))?;
    card.exhaust();
    let damage = card.strength();
    let name = card.name().to_string();

    state.side_mut(defender).take_damage(damage);
    let line = match side {
        Side::Player => format!("{} attacks the opponent directly for {} damage.", name, damage),
        Side::Opponent => format!("{} attacks you directly for {} damage.", name, damage),
    };
    state.narrate(line);

    Ok(AttackOutcome {
        attacker: attacker_id,
        target: None,
        damage_dealt: damage,
        damage_taken: 0,
        casualties: SmallVec::new(),
    })
}

/// Move a field card to its owner's graveyard at health 0.
///
/// Narrates the destruction and returns the graveyard copy, or `None` if the
/// card was not on `side`'s field. Fires no triggers.
pub fn destroy_card(state: &mut GameState, side: Side, id: InstanceId) -> Option<CardInstance> {
    let zones = &mut state.side_mut(side).zones;
    let mut card = zones.take(Zone::Field, id)?;
    card.current_health = 0;
    zones.put(Zone::Graveyard, card.clone(), ZonePosition::Bottom);

    state.narrate(format!("{} is destroyed and goes to the graveyard.", card.name()));
    Some(card)
}
