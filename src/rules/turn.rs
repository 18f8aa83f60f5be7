//! Turn engine: turn-start accrual, draws, and the win check.

use crate::core::{GameConfig, GameState, PixelRefill, Side, TurnPhase};
use crate::zones::Zone;

use super::engine::GameResult;

/// Start `side`'s turn.
///
/// Raises max pixels by one (capped), applies the side's refill rule, readies
/// every field card, draws one card, and hands the turn indicator to `side`.
/// The turn counter advances when the player's turn starts.
pub fn begin_turn(state: &mut GameState, side: Side, config: &GameConfig) {
    let own = state.side_mut(side);
    own.max_pixels = (own.max_pixels + 1).min(config.pixel_cap).max(own.max_pixels);
    own.pixels = match config.refill[side] {
        PixelRefill::Increment => own.pixels.saturating_add(1),
        PixelRefill::RefillToMax => own.max_pixels,
    };
    for card in own.zones.cards_mut(Zone::Field) {
        card.ready();
    }

    draw_card(state, side);

    if side.is_player() {
        state.turn_count += 1;
    }
    state.turn = TurnPhase::of(side);

    let pixels = state.side(side).pixels;
    let line = match side {
        Side::Player => format!(
            "Turn {} - Your turn. ({} pixels available)",
            state.turn_count, pixels
        ),
        Side::Opponent => format!("Opponent's turn. ({} pixels available)", pixels),
    };
    state.narrate(line);

    log::debug!(
        "{} turn start: turn {}, pixels {}/{}",
        side,
        state.turn_count,
        pixels,
        state.side(side).max_pixels
    );
}

/// Draw one card for `side`.
///
/// An empty deck skips the draw and narrates it. Returns whether a card was
/// drawn.
pub fn draw_card(state: &mut GameState, side: Side) -> bool {
    let drawn = state.side_mut(side).zones.draw().is_some();
    let line = match (side, drawn) {
        (Side::Player, true) => "You draw a card.",
        (Side::Opponent, true) => "Opponent draws a card.",
        (Side::Player, false) => "Your deck is empty; no card drawn.",
        (Side::Opponent, false) => "The opponent's deck is empty; no card drawn.",
    };
    state.narrate(line);
    drawn
}

/// Decide the game if either side has reached 0 health.
///
/// Once decided the result never changes: the turn indicator becomes
/// `Ended`, the pending attack selection is cleared, and the opponent's turn
/// stops. Both sides at 0 is a draw.
pub fn check_winner(state: &mut GameState) -> Option<GameResult> {
    if state.winner.is_some() {
        return state.winner;
    }

    let result = match (state.player().is_defeated(), state.opponent().is_defeated()) {
        (false, false) => return None,
        (true, true) => GameResult::Draw,
        (false, true) => GameResult::Winner(Side::Player),
        (true, false) => GameResult::Winner(Side::Opponent),
    };

    state.winner = Some(result);
    state.turn = TurnPhase::Ended;
    state.clear_selection();
    state.opponent_processing = false;
    state.pending_step = None;

    let line = match result {
        GameResult::Winner(Side::Player) => "Victory! The opponent has been defeated.",
        GameResult::Winner(Side::Opponent) => "Defeat! You have been defeated.",
        GameResult::Draw => "Draw! Both sides have fallen.",
    };
    state.narrate(line);
    log::debug!("game over on turn {}: {}", state.turn_count, result);

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardInstance};
    use crate::core::{GameRng, InstanceId, PlayerState};
    use crate::zones::ZonePosition;

    fn state() -> GameState {
        GameState::new(
            PlayerState::new("player", "Player", 20, 1),
            PlayerState::new("ai", "Opponent", 20, 1),
            GameRng::new(11),
        )
    }

    fn card(id: u32) -> CardInstance {
        CardInstance::new(InstanceId(id), CardDefinition::new(format!("c-{}", id), "Card", 1, 1, 1))
    }

    #[test]
    fn test_player_turn_start() {
        let mut state = state();
        let config = GameConfig::default();
        state.side_mut(Side::Player).zones.put(Zone::Deck, card(1), ZonePosition::Bottom);
        state.side_mut(Side::Player).zones.put(Zone::Field, card(2), ZonePosition::Bottom);

        begin_turn(&mut state, Side::Player, &config);

        let player = state.player();
        assert_eq!(player.max_pixels, 2);
        assert_eq!(player.pixels, 2);
        assert_eq!(player.hand().len(), 1);
        assert!(player.field()[0].is_ready());
        assert_eq!(state.turn_count, 2);
        assert_eq!(state.turn, TurnPhase::PlayerTurn);
        assert_eq!(state.log.last(), Some("Turn 2 - Your turn. (2 pixels available)"));
    }

    #[test]
    fn test_opponent_refills_to_max() {
        let mut state = state();
        let config = GameConfig::default();
        state.side_mut(Side::Opponent).pixels = 0;

        begin_turn(&mut state, Side::Opponent, &config);

        let opponent = state.opponent();
        assert_eq!(opponent.max_pixels, 2);
        assert_eq!(opponent.pixels, 2);
        assert_eq!(state.turn_count, 1);
        assert_eq!(state.turn, TurnPhase::OpponentTurn);
    }

    #[test]
    fn test_player_increment_keeps_unspent_pixels() {
        let mut state = state();
        let config = GameConfig::default();
        state.side_mut(Side::Player).max_pixels = 4;
        state.side_mut(Side::Player).pixels = 3;

        begin_turn(&mut state, Side::Player, &config);

        assert_eq!(state.player().max_pixels, 5);
        assert_eq!(state.player().pixels, 4);
    }

    #[test]
    fn test_max_pixels_capped() {
        let mut state = state();
        let config = GameConfig::default();
        state.side_mut(Side::Opponent).max_pixels = 10;

        begin_turn(&mut state, Side::Opponent, &config);

        assert_eq!(state.opponent().max_pixels, 10);
        assert_eq!(state.opponent().pixels, 10);
    }

    #[test]
    fn test_empty_deck_draw_is_logged() {
        let mut state = state();
        assert!(!draw_card(&mut state, Side::Player));
        assert_eq!(state.log.last(), Some("Your deck is empty; no card drawn."));
    }

    #[test]
    fn test_check_winner() {
        let mut state = state();
        assert_eq!(check_winner(&mut state), None);

        state.side_mut(Side::Opponent).health = 0;
        assert_eq!(check_winner(&mut state), Some(GameResult::Winner(Side::Player)));
        assert!(state.is_over());

        // Never changes once decided
        state.side_mut(Side::Player).health = 0;
        assert_eq!(check_winner(&mut state), Some(GameResult::Winner(Side::Player)));
    }

    #[test]
    fn test_double_zero_is_draw() {
        let mut state = state();
        state.side_mut(Side::Player).health = 0;
        state.side_mut(Side::Opponent).health = 0;

        assert_eq!(check_winner(&mut state), Some(GameResult::Draw));
        assert_eq!(state.log.last(), Some("Draw! Both sides have fallen."));
    }
}
