//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type as it
//! appears in the catalog: cost, strength, health, rarity, and display text.
//!
//! Instance-specific data (current health, attack flags) is stored
//! separately in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Identifier for a card definition, e.g. `"link-001"`.
///
/// This identifies the kind of card, not a specific copy in a game.
/// Abilities are looked up by this id.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card rarity. Affects display styling only, never rules.
///
/// Accepts the Spanish rarity names as aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    #[serde(alias = "común", alias = "comun")]
    Common,
    #[serde(alias = "rara")]
    Rare,
    #[serde(alias = "épica", alias = "epica")]
    Epic,
    #[serde(alias = "legendaria")]
    Legendary,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use pixel_forge::cards::{CardDefinition, Rarity};
///
/// let link = CardDefinition::new("link-001", "Link", 2, 3, 4)
///     .with_rarity(Rarity::Rare)
///     .with_ability("Wake Up, Link!", "Returns to your hand when destroyed.");
///
/// assert_eq!(link.pixels_cost, 2);
/// assert!(link.has_ability());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Flavor title shown under the name.
    #[serde(default)]
    pub title: String,

    /// Class or archetype tag.
    #[serde(default)]
    pub card_class: String,

    #[serde(default)]
    pub rarity: Rarity,

    pub pixels_cost: u32,
    pub strength: u32,
    pub health: u32,

    /// Ability name, if the card has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_description: Option<String>,

    /// Image reference for the presentation layer.
    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

impl CardDefinition {
    /// Create a definition with the rules-relevant fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pixels_cost: u32,
        strength: u32,
        health: u32,
    ) -> Self {
        let id = id.into();
        Self {
            image: format!("/cards/{}.png", id),
            id: CardId(id),
            name: name.into(),
            title: String::new(),
            card_class: String::new(),
            rarity: Rarity::default(),
            pixels_cost,
            strength,
            health,
            ability: None,
            ability_description: None,
            quote: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, card_class: impl Into<String>) -> Self {
        self.card_class = card_class.into();
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Attach an ability name and its description.
    #[must_use]
    pub fn with_ability(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.ability = Some(name.into());
        self.ability_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn has_ability(&self) -> bool {
        self.ability.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("ori-017");
        assert_eq!(id.as_str(), "ori-017");
        assert_eq!(format!("{}", id), "ori-017");
        assert_eq!(CardId::from("ori-017"), id);
    }

    #[test]
    fn test_builder() {
        let card = CardDefinition::new("joel-008", "Joel", 3, 4, 4)
            .with_title("The Survivor")
            .with_class("Survivor")
            .with_rarity(Rarity::Epic);

        assert_eq!(card.id, CardId::new("joel-008"));
        assert_eq!(card.title, "The Survivor");
        assert_eq!(card.rarity, Rarity::Epic);
        assert!(!card.has_ability());
        assert_eq!(card.image, "/cards/joel-008.png");
    }

    #[test]
    fn test_rarity_aliases() {
        let rarities: Vec<Rarity> =
            serde_json::from_str(r#"["común", "rara", "épica", "legendaria", "epic"]"#).unwrap();

        assert_eq!(
            rarities,
            vec![Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary, Rarity::Epic]
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "id": "kirby-004",
            "name": "Kirby",
            "title": "Star Warrior",
            "card_class": "Support",
            "expansion": "Base",
            "artist": "someone",
            "pixels_cost": 1,
            "strength": 1,
            "health": 4,
            "rarity": "común",
            "image": "/cards/kirby.png"
        }"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Kirby");
        assert_eq!(card.health, 4);
        assert_eq!(card.ability, None);
    }
}
