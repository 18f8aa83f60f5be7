//! The bundled reference card set.
//!
//! Twenty cards, four of which carry registered abilities:
//! `link-001` (returns to hand on death), `luigi-002` (shuffles into the deck
//! and draws three on play), `joel-008` (bonus damage on kill), and
//! `ori-017` (destroys an enemy card on death). See
//! `AbilityRegistry::reference`.

use super::catalog::CardCatalog;
use super::definition::{CardDefinition, Rarity};

impl CardCatalog {
    /// The bundled twenty-card reference catalog.
    #[must_use]
    pub fn reference() -> Self {
        let mut catalog = CardCatalog::new();
        for card in reference_cards() {
            catalog.register(card);
        }
        catalog
    }
}

fn card(
    id: &str,
    name: &str,
    title: &str,
    class: &str,
    rarity: Rarity,
    (cost, strength, health): (u32, u32, u32),
) -> CardDefinition {
    CardDefinition::new(id, name, cost, strength, health)
        .with_title(title)
        .with_class(class)
        .with_rarity(rarity)
}

fn reference_cards() -> Vec<CardDefinition> {
    use Rarity::*;

    vec![
        card("link-001", "Link", "Hero of Hyrule", "Warrior", Rare, (2, 3, 4))
            .with_ability("Wake Up, Link!", "When Link is destroyed, he returns to your hand."),
        card("luigi-002", "Luigi", "The Green Brother", "Support", Common, (2, 2, 3))
            .with_ability(
                "Player Two",
                "When played, shuffle Luigi into your deck and draw 3 cards.",
            ),
        card("samus-003", "Samus Aran", "Bounty Hunter", "Ranger", Epic, (4, 5, 5)),
        card("kirby-004", "Kirby", "Star Warrior", "Support", Common, (1, 1, 4)),
        card("pikachu-005", "Pikachu", "Electric Mouse", "Mage", Rare, (1, 3, 2)),
        card("megaman-006", "Mega Man", "Blue Bomber", "Ranger", Common, (3, 4, 3)),
        card("sonic-007", "Sonic", "Fastest Thing Alive", "Rogue", Common, (2, 3, 2)),
        card("joel-008", "Joel", "The Survivor", "Survivor", Epic, (3, 4, 4))
            .with_ability(
                "I'd Do It Again",
                "When Joel destroys a card, he deals 2 extra damage to the opposing player.",
            ),
        card("kratos-009", "Kratos", "Ghost of Sparta", "Warrior", Legendary, (6, 7, 7)),
        card("geralt-010", "Geralt", "White Wolf", "Warrior", Epic, (5, 6, 5)),
        card("mario-011", "Mario", "Plumber Hero", "Warrior", Common, (3, 3, 5)),
        card("chief-012", "Master Chief", "Spartan-117", "Soldier", Legendary, (5, 5, 7)),
        card("lara-013", "Lara Croft", "Tomb Raider", "Rogue", Rare, (3, 4, 3)),
        card("cloud-014", "Cloud", "Ex-SOLDIER", "Warrior", Epic, (4, 5, 4)),
        card("dk-015", "Donkey Kong", "Jungle King", "Brute", Rare, (4, 3, 7)),
        card("pacman-016", "Pac-Man", "Maze Runner", "Support", Common, (1, 2, 2)),
        card("ori-017", "Ori", "Spirit of Light", "Spirit", Rare, (3, 2, 3))
            .with_ability(
                "Light Burst",
                "When Ori is destroyed, destroy the first card on the opposing field.",
            ),
        card("steve-018", "Steve", "Block Builder", "Builder", Common, (2, 2, 4)),
        card("knight-019", "The Knight", "Vessel of Hallownest", "Warrior", Rare, (2, 3, 3)),
        card("cuphead-020", "Cuphead", "Debt Collector", "Ranger", Common, (1, 2, 1)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::cards::{CardCatalog, CardId};

    #[test]
    fn test_reference_catalog_size() {
        let catalog = CardCatalog::reference();
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn test_reference_has_ability_cards() {
        let catalog = CardCatalog::reference();
        for id in ["link-001", "luigi-002", "joel-008", "ori-017"] {
            let card = catalog.get(&CardId::new(id)).unwrap();
            assert!(card.has_ability(), "{} should carry an ability", id);
        }
    }

    #[test]
    fn test_reference_cards_are_affordable() {
        let catalog = CardCatalog::reference();
        assert!(catalog.iter().all(|c| c.pixels_cost <= 10 && c.health > 0));
    }
}
