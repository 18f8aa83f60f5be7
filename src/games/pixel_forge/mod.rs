//! Pixel Forge: the two-player card battle.
//!
//! - Each side starts with 20 health, 1 pixel, and 3 cards from a 15-card deck
//! - Pay a card's pixel cost to deploy it; it can attack from your next turn
//! - Attack an opposing card (mutual damage) or the opposing side directly
//! - Ending your turn runs the scripted opponent's whole turn
//! - First side to 0 health loses
//!
//! ## Example
//!
//! ```
//! use pixel_forge::games::pixel_forge::PixelForgeBuilder;
//! use pixel_forge::rules::RulesEngine;
//! use pixel_forge::core::Side;
//!
//! let (game, mut state) = PixelForgeBuilder::new().build(42);
//!
//! let opponent_actions = game.end_turn(&mut state).unwrap();
//! assert!(state.is_turn_of(Side::Player));
//! assert!(opponent_actions.len() <= 3);
//! assert!(game.is_terminal(&state).is_none());
//! ```

mod game;

pub use game::{PixelForge, PixelForgeBuilder};
