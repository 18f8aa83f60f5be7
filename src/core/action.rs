//! Action representation.
//!
//! Actions are the requests a side can make of the engine. The human side
//! issues them through the presentation layer; the opponent policy produces
//! the same kinds of requests. Every applied action is recorded in the
//! game's action history as an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::Side;

/// A request to the engine.
///
/// ## Example
///
/// ```
/// use pixel_forge::core::{Action, InstanceId};
///
/// let play = Action::PlayCard(InstanceId(5));
/// let direct = Action::Attack { target: None };
/// let clash = Action::Attack { target: Some(InstanceId(9)) };
///
/// assert!(play.is_play());
/// assert!(direct.is_attack() && clash.is_attack());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move a card from hand to field, paying its cost.
    PlayCard(InstanceId),
    /// Select a field card as the pending attacker.
    DeclareAttacker(InstanceId),
    /// Drop the pending attacker selection.
    CancelAttack,
    /// Resolve the pending attack against a field card, or directly.
    Attack { target: Option<InstanceId> },
    /// Hand the turn to the opponent.
    EndTurn,
    /// Discard the game and start a fresh one.
    Restart,
}

impl Action {
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::PlayCard(_))
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Action::Attack { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayCard(id) => write!(f, "Play({})", id),
            Action::DeclareAttacker(id) => write!(f, "Declare({})", id),
            Action::CancelAttack => write!(f, "CancelAttack"),
            Action::Attack { target: Some(id) } => write!(f, "Attack({})", id),
            Action::Attack { target: None } => write!(f, "Attack(direct)"),
            Action::EndTurn => write!(f, "EndTurn"),
            Action::Restart => write!(f, "Restart"),
        }
    }
}

/// Record of an action in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Side that took the action.
    pub side: Side,
    /// The action taken.
    pub action: Action,
    /// Turn number when the action was taken.
    pub turn: u32,
    /// Sequence number within the game.
    pub sequence: u32,
}
