//! Rules engine trait.
//!
//! `RulesEngine` is the action-level interface to a game:
//! - What actions are legal for a side
//! - How an action modifies state
//! - Whether the game is over

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, GameState, Side};
use crate::error::Result;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Both sides fell together.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// The winning side, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{} wins", side),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if the side can't act
/// - `apply_action`: Must be deterministic given the state's RNG; an illegal
///   action returns the error and leaves state unchanged apart from the log
/// - `is_terminal`: Return `None` if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate the actions `side` may take right now.
    fn legal_actions(&self, state: &GameState, side: Side) -> Vec<Action>;

    /// Apply an action for `side`.
    fn apply_action(&mut self, state: &mut GameState, side: Side, action: &Action) -> Result<()>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Is `action` currently legal for `side`?
    fn is_legal(&self, state: &GameState, side: Side, action: &Action) -> bool {
        self.legal_actions(state, side).contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Side::Opponent);
        assert!(!result.is_winner(Side::Player));
        assert!(result.is_winner(Side::Opponent));
        assert_eq!(result.winner(), Some(Side::Opponent));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Side::Player));
        assert!(!draw.is_winner(Side::Opponent));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(Side::Player).to_string(), "Player wins");
        assert_eq!(GameResult::Draw.to_string(), "Draw");
    }
}
