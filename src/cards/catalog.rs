//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every playable card definition. It preserves
//! insertion order (deck building samples from it by index, so order must be
//! stable for seeded games to replay) and indexes definitions by `CardId`.
//!
//! Catalogs come from an external JSON data source via `from_json`, or from
//! the bundled `CardCatalog::reference()` set.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::error::CatalogError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use pixel_forge::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("kirby-004", "Kirby", 1, 1, 4));
///
/// let found = catalog.get(&CardId::new("kirby-004")).unwrap();
/// assert_eq!(found.name, "Kirby");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of card records.
    ///
    /// Unknown fields are ignored. Duplicate ids and cards with zero base
    /// health are rejected.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Build a catalog from definitions, validating each one.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.try_register(definition)?;
        }
        log::debug!("loaded card catalog with {} cards", catalog.len());
        Ok(catalog)
    }

    /// Register a card definition, rejecting duplicates and invalid cards.
    pub fn try_register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if card.health == 0 {
            return Err(CatalogError::InvalidCard {
                id: card.id,
                reason: "base health must be positive".to_string(),
            });
        }
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Register a card definition.
    ///
    /// Panics if the id is already registered or the card has zero health.
    /// Use `try_register` for external data.
    pub fn register(&mut self, card: CardDefinition) {
        if let Err(err) = self.try_register(card) {
            panic!("{}", err);
        }
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}
