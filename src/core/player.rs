//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The game always has exactly two sides: the human-controlled `Player` and
//! the scripted `Opponent`.
//!
//! ## SideMap
//!
//! Per-side storage with one slot for each side, indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled side.
    Player,
    /// The scripted opponent.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    ///
    /// ```
    /// use pixel_forge::core::Side;
    ///
    /// assert_eq!(Side::Player.opposing(), Side::Opponent);
    /// assert_eq!(Side::Opponent.opposing(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Is this the human side?
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Side::Player)
    }

    /// Narration form as a grammatical object ("you", "the opponent").
    #[must_use]
    pub const fn object(self) -> &'static str {
        match self {
            Side::Player => "you",
            Side::Opponent => "the opponent",
        }
    }

    /// Narration form as a possessive ("your", "the opponent's").
    #[must_use]
    pub const fn possessive(self) -> &'static str {
        match self {
            Side::Player => "your",
            Side::Opponent => "the opponent's",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use pixel_forge::core::{Side, SideMap};
///
/// let mut health: SideMap<u32> = SideMap::with_value(20);
/// health[Side::Opponent] = 15;
///
/// assert_eq!(health[Side::Player], 20);
/// assert_eq!(health[Side::Opponent], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    opponent: T,
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            opponent: factory(Side::Opponent),
        }
    }

    /// Create a SideMap from explicit values.
    pub const fn from_pair(player: T, opponent: T) -> Self {
        Self { player, opponent }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            opponent: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over `(Side, &T)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Opponent, &self.opponent)].into_iter()
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
