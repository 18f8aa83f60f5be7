//! Card system: definitions, instances, catalog, and deck building.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions (e.g. `"link-001"`)
//! - `CardDefinition`: Static card data from the catalog
//! - `CardInstance`: Runtime card state (current health, attack flags)
//! - `CardCatalog`: Card definition lookup, JSON loading
//! - `build_deck`: The deck factory

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod instance;
mod reference;

pub use catalog::CardCatalog;
pub use deck::build_deck;
pub use definition::{CardDefinition, CardId, Rarity};
pub use instance::CardInstance;
