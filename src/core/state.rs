//! Game state.
//!
//! ## PlayerState
//!
//! One side's containers, health, pixels, and reserved score.
//!
//! ## GameState
//!
//! The single owned value that the engine mutates:
//! - Both player states
//! - Turn indicator, turn counter, winner
//! - The player's pending attack selection
//! - The opponent-processing gate and pending opponent turn step
//! - Narrated log and action history
//! - Instance id allocator and RNG streams
//!
//! The whole state is serde-serializable and cheap to clone, so it doubles as
//! the snapshot handed to the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::entity::{InstanceId, InstanceIdAllocator};
use super::log::GameLog;
use super::player::{Side, SideMap};
use super::rng::GameRng;
use crate::cards::CardInstance;
use crate::rules::GameResult;
use crate::zones::{PlayerZones, Zone};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    PlayerTurn,
    OpponentTurn,
    /// A winner has been decided; no further plays or attacks are legal.
    Ended,
}

impl TurnPhase {
    /// The side that may act, if the game is running.
    #[must_use]
    pub const fn active_side(self) -> Option<Side> {
        match self {
            TurnPhase::PlayerTurn => Some(Side::Player),
            TurnPhase::OpponentTurn => Some(Side::Opponent),
            TurnPhase::Ended => None,
        }
    }

    #[must_use]
    pub const fn of(side: Side) -> Self {
        match side {
            Side::Player => TurnPhase::PlayerTurn,
            Side::Opponent => TurnPhase::OpponentTurn,
        }
    }
}

/// The player's attack-declaration interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatPhase {
    #[default]
    None,
    /// An attacker is selected and a target must be chosen.
    AwaitingTarget,
}

/// Discrete steps of the opponent's turn.
///
/// The presentation layer may advance these one at a time to pace the
/// opponent; the engine never interleaves them with player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStep {
    /// Opponent turn-start accrual and draw.
    OpponentStart,
    /// Opponent plays at most one card.
    OpponentPlay,
    /// Opponent attacks; `remaining` attacks are still allowed.
    OpponentAttack { remaining: usize },
    /// Start of the player's next turn.
    HandBack,
}

/// One side's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: String,
    pub name: String,
    pub zones: PlayerZones,
    /// Health, floor 0.
    pub health: u32,
    /// Pixels available to spend now.
    pub pixels: u32,
    /// Pixel maximum, capped by config.
    pub max_pixels: u32,
    /// Reserved; not used by the rules.
    pub score: u32,
}

impl PlayerState {
    /// Create a side with an empty board.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, health: u32, pixels: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            zones: PlayerZones::new(),
            health,
            pixels,
            max_pixels: pixels,
            score: 0,
        }
    }

    pub fn hand(&self) -> &[CardInstance] {
        self.zones.hand()
    }

    pub fn deck(&self) -> &[CardInstance] {
        self.zones.deck()
    }

    pub fn field(&self) -> &[CardInstance] {
        self.zones.field()
    }

    pub fn graveyard(&self) -> &[CardInstance] {
        self.zones.graveyard()
    }

    /// Find a card on this side's field.
    #[must_use]
    pub fn field_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.zones.get(Zone::Field, id)
    }

    /// Find a card in this side's hand.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.zones.get(Zone::Hand, id)
    }

    /// Hand cards this side can pay for right now, in hand order.
    pub fn playable(&self) -> impl Iterator<Item = &CardInstance> {
        let pixels = self.pixels;
        self.hand().iter().filter(move |card| card.cost() <= pixels)
    }

    /// Field cards that may attack right now, in field order.
    pub fn ready_attackers(&self) -> impl Iterator<Item = &CardInstance> {
        self.field().iter().filter(|card| card.is_ready())
    }

    /// Reduce health by `amount`, floor 0.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }
}

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Per-side state.
    pub sides: SideMap<PlayerState>,

    /// Whose turn it is, or `Ended`.
    pub turn: TurnPhase,

    /// Turn counter (starts at 1, +1 per full round).
    pub turn_count: u32,

    /// Narrated events.
    pub log: GameLog,

    /// Set once a side reaches 0 health.
    pub winner: Option<GameResult>,

    /// The player's pending attacker.
    pub selected_attacker: Option<InstanceId>,

    pub combat: CombatPhase,

    /// Set while the opponent's turn is running.
    pub opponent_processing: bool,

    /// Next opponent turn step to run, if the opponent's turn is in progress.
    pub pending_step: Option<TurnStep>,

    /// Every applied action, in order.
    pub history: Vector<ActionRecord>,

    next_sequence: u32,

    /// Allocator for card instance ids.
    pub ids: InstanceIdAllocator,

    /// Deck building and in-game shuffles.
    pub rng: GameRng,

    /// Opponent decisions.
    pub policy_rng: GameRng,
}

impl GameState {
    /// Create a state with two empty sides, player to move on turn 1.
    #[must_use]
    pub fn new(player: PlayerState, opponent: PlayerState, rng: GameRng) -> Self {
        let policy_rng = rng.for_context("opponent");
        Self {
            sides: SideMap::from_pair(player, opponent),
            turn: TurnPhase::PlayerTurn,
            turn_count: 1,
            log: GameLog::new(),
            winner: None,
            selected_attacker: None,
            combat: CombatPhase::None,
            opponent_processing: false,
            pending_step: None,
            history: Vector::new(),
            next_sequence: 0,
            ids: InstanceIdAllocator::new(),
            rng,
            policy_rng,
        }
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &PlayerState {
        &self.sides[side]
    }

    pub fn side_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.sides[side]
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.sides[Side::Player]
    }

    #[must_use]
    pub fn opponent(&self) -> &PlayerState {
        &self.sides[Side::Opponent]
    }

    /// Has a winner (or draw) been decided?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn == TurnPhase::Ended
    }

    /// Is it `side`'s turn?
    #[must_use]
    pub fn is_turn_of(&self, side: Side) -> bool {
        self.turn.active_side() == Some(side)
    }

    /// Find which side and zone hold a card instance.
    #[must_use]
    pub fn locate(&self, id: InstanceId) -> Option<(Side, Zone)> {
        self.sides
            .iter()
            .find_map(|(side, state)| state.zones.locate(id).map(|zone| (side, zone)))
    }

    /// Append a narrated line.
    pub fn narrate(&mut self, line: impl Into<String>) {
        self.log.push(line);
    }

    /// Record an applied action in the history.
    pub fn record_action(&mut self, side: Side, action: Action) {
        let record = ActionRecord {
            side,
            action,
            turn: self.turn_count,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.history.push_back(record);
    }

    /// Clear the player's pending attack selection.
    pub fn clear_selection(&mut self) {
        self.selected_attacker = None;
        self.combat = CombatPhase::None;
    }
}
