//! Per-player card containers and movement between them.
//!
//! `PlayerZones` owns a side's four containers:
//! - Deck: ordered, index 0 is the next draw
//! - Hand: ordered by draw order
//! - Field: deployed cards, insertion order
//! - Graveyard: destroyed cards, insertion order
//!
//! A card instance lives in exactly one container at a time. Cards are
//! located by `InstanceId`; moving a card means `take` from one zone and
//! `put` into another.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{GameRng, InstanceId};

/// One of a side's card containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Field,
    Graveyard,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Field, Zone::Graveyard];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Field => "field",
            Zone::Graveyard => "graveyard",
        };
        write!(f, "{}", name)
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Front of the zone (next draw, for the deck).
    Top,
    /// End of the zone.
    Bottom,
    /// Insert at a specific index (clamped to the zone length).
    Index(usize),
}

/// A side's deck, hand, field, and graveyard.
///
/// ## Usage
///
/// ```
/// use pixel_forge::cards::{CardDefinition, CardInstance};
/// use pixel_forge::core::InstanceId;
/// use pixel_forge::zones::{PlayerZones, Zone, ZonePosition};
///
/// let mut zones = PlayerZones::new();
/// let card = CardInstance::new(InstanceId(1), CardDefinition::new("kirby-004", "Kirby", 1, 1, 4));
/// zones.put(Zone::Deck, card, ZonePosition::Bottom);
///
/// let drawn = zones.draw().map(|c| c.instance_id);
/// assert_eq!(drawn, Some(InstanceId(1)));
/// assert_eq!(zones.locate(InstanceId(1)), Some(Zone::Hand));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    deck: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    field: Vec<CardInstance>,
    graveyard: Vec<CardInstance>,
}

impl PlayerZones {
    /// Create empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create zones holding `deck` in draw order.
    #[must_use]
    pub fn with_deck(deck: Vec<CardInstance>) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// Cards in a zone, in zone order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardInstance] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Field => &self.field,
            Zone::Graveyard => &self.graveyard,
        }
    }

    fn cards_vec_mut(&mut self, zone: Zone) -> &mut Vec<CardInstance> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Field => &mut self.field,
            Zone::Graveyard => &mut self.graveyard,
        }
    }

    /// Mutable access to every card in a zone (order and membership fixed).
    pub fn cards_mut(&mut self, zone: Zone) -> &mut [CardInstance] {
        self.cards_vec_mut(zone)
    }

    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    pub fn field(&self) -> &[CardInstance] {
        &self.field
    }

    pub fn graveyard(&self) -> &[CardInstance] {
        &self.graveyard
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.cards(zone).len()
    }

    /// Total cards across all four zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Zone::ALL.iter().map(|&z| self.zone_size(z)).sum()
    }

    /// Which zone holds a card, if any.
    #[must_use]
    pub fn locate(&self, id: InstanceId) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.cards(zone).iter().any(|c| c.instance_id == id))
    }

    /// Find a card in a specific zone.
    #[must_use]
    pub fn get(&self, zone: Zone, id: InstanceId) -> Option<&CardInstance> {
        self.cards(zone).iter().find(|c| c.instance_id == id)
    }

    /// Find a card in a specific zone, mutably.
    pub fn get_mut(&mut self, zone: Zone, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards_vec_mut(zone).iter_mut().find(|c| c.instance_id == id)
    }

    /// Remove a card from a zone, preserving the order of the rest.
    pub fn take(&mut self, zone: Zone, id: InstanceId) -> Option<CardInstance> {
        let cards = self.cards_vec_mut(zone);
        let index = cards.iter().position(|c| c.instance_id == id)?;
        Some(cards.remove(index))
    }

    /// Remove the card at the front of a zone.
    pub fn take_first(&mut self, zone: Zone) -> Option<CardInstance> {
        let cards = self.cards_vec_mut(zone);
        if cards.is_empty() {
            None
        } else {
            Some(cards.remove(0))
        }
    }

    /// Add a card to a zone.
    ///
    /// Panics in debug builds if the instance is already in any zone.
    pub fn put(&mut self, zone: Zone, card: CardInstance, position: ZonePosition) {
        debug_assert!(
            self.locate(card.instance_id).is_none(),
            "{} already exists in zone {:?}",
            card.instance_id,
            self.locate(card.instance_id)
        );

        let cards = self.cards_vec_mut(zone);
        match position {
            ZonePosition::Top => cards.insert(0, card),
            ZonePosition::Bottom => cards.push(card),
            ZonePosition::Index(i) => {
                let idx = i.min(cards.len());
                cards.insert(idx, card);
            }
        }
    }

    /// Move a card between zones, keeping its state.
    ///
    /// Returns `false` if the card was not in `from`.
    pub fn move_card(&mut self, id: InstanceId, from: Zone, to: Zone, position: ZonePosition) -> bool {
        match self.take(from, id) {
            Some(card) => {
                self.put(to, card, position);
                true
            }
            None => false,
        }
    }

    /// Draw the next deck card into the hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<&CardInstance> {
        let card = self.take_first(Zone::Deck)?;
        self.hand.push(card);
        self.hand.last()
    }

    /// Shuffle the deck.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn card(id: u32) -> CardInstance {
        CardInstance::new(
            InstanceId(id),
            CardDefinition::new(format!("card-{}", id), format!("Card {}", id), 1, 1, 1),
        )
    }

    fn ids(cards: &[CardInstance]) -> Vec<u32> {
        cards.iter().map(|c| c.instance_id.0).collect()
    }

    #[test]
    fn test_positions() {
        let mut zones = PlayerZones::new();

        zones.put(Zone::Deck, card(1), ZonePosition::Bottom);
        zones.put(Zone::Deck, card(2), ZonePosition::Bottom);
        zones.put(Zone::Deck, card(3), ZonePosition::Top);
        zones.put(Zone::Deck, card(4), ZonePosition::Index(1));
        zones.put(Zone::Deck, card(5), ZonePosition::Index(99));

        assert_eq!(ids(zones.deck()), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_draw_takes_front() {
        let mut zones = PlayerZones::with_deck(vec![card(1), card(2), card(3)]);

        assert_eq!(zones.draw().map(|c| c.instance_id), Some(InstanceId(1)));
        assert_eq!(zones.draw().map(|c| c.instance_id), Some(InstanceId(2)));

        assert_eq!(ids(zones.hand()), vec![1, 2]);
        assert_eq!(ids(zones.deck()), vec![3]);
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut zones = PlayerZones::new();
        assert!(zones.draw().is_none());
        assert!(zones.hand().is_empty());
    }

    #[test]
    fn test_move_card() {
        let mut zones = PlayerZones::with_deck(vec![card(1), card(2)]);

        assert!(zones.move_card(InstanceId(2), Zone::Deck, Zone::Field, ZonePosition::Bottom));
        assert_eq!(zones.locate(InstanceId(2)), Some(Zone::Field));
        assert_eq!(zones.total_cards(), 2);

        // Not in the source zone
        assert!(!zones.move_card(InstanceId(2), Zone::Hand, Zone::Graveyard, ZonePosition::Bottom));
        assert_eq!(zones.locate(InstanceId(2)), Some(Zone::Field));
    }

    #[test]
    fn test_take_preserves_order() {
        let mut zones = PlayerZones::new();
        for id in 1..=4 {
            zones.put(Zone::Field, card(id), ZonePosition::Bottom);
        }

        let taken = zones.take(Zone::Field, InstanceId(2));
        assert_eq!(taken.map(|c| c.instance_id), Some(InstanceId(2)));
        assert_eq!(ids(zones.field()), vec![1, 3, 4]);
        assert!(zones.take(Zone::Field, InstanceId(2)).is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut zones = PlayerZones::new();
        zones.put(Zone::Field, card(7), ZonePosition::Bottom);

        if let Some(c) = zones.get_mut(Zone::Field, InstanceId(7)) {
            c.ready();
        }

        assert!(zones.get(Zone::Field, InstanceId(7)).unwrap().is_ready());
        assert!(zones.get(Zone::Hand, InstanceId(7)).is_none());
    }

    #[test]
    #[should_panic(expected = "already exists")]
    #[cfg(debug_assertions)]
    fn test_duplicate_put_panics() {
        let mut zones = PlayerZones::new();
        zones.put(Zone::Hand, card(1), ZonePosition::Bottom);
        zones.put(Zone::Field, card(1), ZonePosition::Bottom);
    }

    #[test]
    fn test_shuffle_deck_keeps_cards() {
        let mut zones = PlayerZones::with_deck((1..=10).map(card).collect());
        zones.shuffle_deck(&mut GameRng::new(42));

        let mut shuffled = ids(zones.deck());
        assert_ne!(shuffled, (1..=10).collect::<Vec<_>>());
        shuffled.sort();
        assert_eq!(shuffled, (1..=10).collect::<Vec<_>>());
    }
}
