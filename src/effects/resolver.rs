//! Effect resolution - applying ability effects to game state.
//!
//! The resolver receives the effect, a snapshot of the card whose ability
//! fired, and the side that owns that card. Every applied effect narrates
//! what it did; an effect whose preconditions no longer hold is skipped.

use crate::cards::CardInstance;
use crate::core::{GameState, Side};
use crate::rules::{check_winner, destroy_card};
use crate::zones::{Zone, ZonePosition};

use super::AbilityEffect;

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect applied.
    Applied,
    /// Effect did nothing (e.g., no card to destroy).
    Skipped(String),
}

impl ResolveResult {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ResolveResult::Applied)
    }
}

/// Resolves ability effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `effect` for `source`, a card owned by `owner`.
    pub fn resolve(
        state: &mut GameState,
        effect: &AbilityEffect,
        source: &CardInstance,
        owner: Side,
    ) -> ResolveResult {
        let result = match effect {
            AbilityEffect::ReturnToHand => Self::return_to_hand(state, source, owner),
            AbilityEffect::DestroyFirstEnemy => Self::destroy_first_enemy(state, source, owner),
            AbilityEffect::BonusDamage(amount) => Self::bonus_damage(state, source, owner, *amount),
            AbilityEffect::ShuffleIntoDeckAndDraw(count) => {
                Self::shuffle_and_draw(state, source, owner, *count)
            }
        };

        log::debug!(
            "{} ({}) {}: {:?}",
            source.name(),
            owner,
            effect.name(),
            result
        );
        result
    }

    fn return_to_hand(state: &mut GameState, source: &CardInstance, owner: Side) -> ResolveResult {
        let zones = &mut state.side_mut(owner).zones;
        let Some(mut card) = zones.take(Zone::Graveyard, source.instance_id) else {
            return ResolveResult::Skipped(format!("{} is not in the graveyard", source.name()));
        };

        card.restore_health();
        card.summon_sick();
        zones.put(Zone::Hand, card, ZonePosition::Bottom);

        state.narrate(format!(
            "{} returns to {} hand.",
            source.name(),
            owner.possessive()
        ));
        ResolveResult::Applied
    }

    fn destroy_first_enemy(state: &mut GameState, source: &CardInstance, owner: Side) -> ResolveResult {
        let enemy = owner.opposing();
        let Some(victim) = state.side(enemy).field().first().map(|c| c.instance_id) else {
            return ResolveResult::Skipped("no enemy card on the field".to_string());
        };

        let victim_name = state
            .side(enemy)
            .field_card(victim)
            .map(|c| c.name().to_string())
            .unwrap_or_default();
        state.narrate(format!("{}'s ability destroys {}.", source.name(), victim_name));
        destroy_card(state, enemy, victim);
        ResolveResult::Applied
    }

    fn bonus_damage(state: &mut GameState, source: &CardInstance, owner: Side, amount: u32) -> ResolveResult {
        let enemy = owner.opposing();
        state.side_mut(enemy).take_damage(amount);
        state.narrate(format!(
            "{} deals {} bonus damage to {}.",
            source.name(),
            amount,
            enemy.object()
        ));
        check_winner(state);
        ResolveResult::Applied
    }

    fn shuffle_and_draw(
        state: &mut GameState,
        source: &CardInstance,
        owner: Side,
        count: usize,
    ) -> ResolveResult {
        if state.side(owner).zones.zone_size(Zone::Deck) < count {
            state.narrate(format!(
                "Not enough cards in the deck to trigger {}'s ability.",
                source.name()
            ));
            return ResolveResult::Skipped(format!("deck holds fewer than {} cards", count));
        }

        let GameState { sides, rng, .. } = &mut *state;
        let zones = &mut sides[owner].zones;
        let Some(mut card) = zones.take(Zone::Field, source.instance_id) else {
            return ResolveResult::Skipped(format!("{} is not on the field", source.name()));
        };

        card.summon_sick();
        zones.put(Zone::Deck, card, ZonePosition::Bottom);
        zones.shuffle_deck(rng);
        for _ in 0..count {
            zones.draw();
        }

        let line = match owner {
            Side::Player => format!(
                "{} shuffles into your deck and you draw {} cards.",
                source.name(),
                count
            ),
            Side::Opponent => format!(
                "{} shuffles into the opponent's deck and the opponent draws {} cards.",
                source.name(),
                count
            ),
        };
        state.narrate(line);
        ResolveResult::Applied
    }
}
