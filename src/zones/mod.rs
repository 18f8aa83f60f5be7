//! Zone system: each side's deck, hand, field, and graveyard.
//!
//! Cards only ever move between these four containers; they are never
//! created or destroyed after the deck is built.

mod player_zones;

pub use player_zones::{PlayerZones, Zone, ZonePosition};
