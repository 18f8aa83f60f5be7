//! Card lifecycle events.

use serde::{Deserialize, Serialize};

/// A lifecycle event that can fire a card's ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// The card moved from hand to field.
    OnPlay,
    /// The card was destroyed in combat.
    OnDeath,
    /// The card destroyed its combat target and survived.
    OnKill,
}

impl TriggerEvent {
    pub const ALL: [TriggerEvent; 3] = [TriggerEvent::OnPlay, TriggerEvent::OnDeath, TriggerEvent::OnKill];
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TriggerEvent::OnPlay => "on_play",
            TriggerEvent::OnDeath => "on_death",
            TriggerEvent::OnKill => "on_kill",
        };
        write!(f, "{}", name)
    }
}
