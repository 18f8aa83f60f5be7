//! Ability effect definitions.
//!
//! Effects are the atomic outcomes a card ability can produce. Each is a
//! tagged variant with its parameters inline; the resolver gives them
//! meaning against a `GameState`.

use serde::{Deserialize, Serialize};

/// An atomic ability outcome.
///
/// ## Card Movement
///
/// - `ReturnToHand`: the source card leaves its owner's graveyard for the
///   owner's hand, restored to base health with both attack flags cleared
/// - `ShuffleIntoDeckAndDraw`: the source card leaves the field for the
///   owner's deck, the deck is shuffled, then the owner draws
///
/// ## Destruction and Damage
///
/// - `DestroyFirstEnemy`: the first card on the opposing field is destroyed
/// - `BonusDamage`: the opposing side loses health
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Return the source card from the graveyard to its owner's hand.
    ReturnToHand,

    /// Destroy the first card on the opposing field.
    ///
    /// The destroyed card's own triggers do not fire.
    DestroyFirstEnemy,

    /// Deal damage to the opposing side directly.
    BonusDamage(u32),

    /// Shuffle the source card into its owner's deck and draw `n` cards.
    ///
    /// Only applies when the deck holds at least `n` cards.
    ShuffleIntoDeckAndDraw(usize),
}

impl AbilityEffect {
    /// Short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AbilityEffect::ReturnToHand => "return_to_hand",
            AbilityEffect::DestroyFirstEnemy => "destroy_first_enemy",
            AbilityEffect::BonusDamage(_) => "bonus_damage",
            AbilityEffect::ShuffleIntoDeckAndDraw(_) => "shuffle_into_deck_and_draw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_serialization() {
        let effects = vec![
            AbilityEffect::ReturnToHand,
            AbilityEffect::DestroyFirstEnemy,
            AbilityEffect::BonusDamage(2),
            AbilityEffect::ShuffleIntoDeckAndDraw(3),
        ];

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: Vec<AbilityEffect> = serde_json::from_str(&json).unwrap();

        assert_eq!(effects, deserialized);
    }

    #[test]
    fn test_names() {
        assert_eq!(AbilityEffect::BonusDamage(5).name(), "bonus_damage");
        assert_eq!(AbilityEffect::ReturnToHand.name(), "return_to_hand");
    }
}
