//! Deck factory.
//!
//! Builds a duplicate-free, randomly ordered deck of fresh card instances
//! from a catalog.

use super::catalog::CardCatalog;
use super::instance::CardInstance;
use crate::core::{GameRng, InstanceIdAllocator};

/// Build a deck of `size` distinct cards.
///
/// Draws `size` catalog entries uniformly without replacement (clamped to the
/// catalog size), instantiates each at full health with both attack flags
/// false and a fresh instance id, then shuffles the result independently of
/// the selection draw. An empty catalog yields an empty deck.
///
/// ```
/// use pixel_forge::cards::{build_deck, CardCatalog};
/// use pixel_forge::core::{GameRng, InstanceIdAllocator};
///
/// let catalog = CardCatalog::reference();
/// let mut rng = GameRng::new(42);
/// let mut ids = InstanceIdAllocator::new();
///
/// let deck = build_deck(&catalog, 15, &mut rng, &mut ids);
/// assert_eq!(deck.len(), 15);
/// ```
pub fn build_deck(
    catalog: &CardCatalog,
    size: usize,
    rng: &mut GameRng,
    ids: &mut InstanceIdAllocator,
) -> Vec<CardInstance> {
    let size = size.min(catalog.len());
    let mut available: Vec<_> = catalog.iter().collect();
    let mut deck = Vec::with_capacity(size);

    while deck.len() < size {
        let index = rng.gen_range_usize(0..available.len());
        let definition = available.swap_remove(index);
        deck.push(CardInstance::new(ids.alloc(), definition.clone()));
    }

    rng.shuffle(&mut deck);
    deck
}
