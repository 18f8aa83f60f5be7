//! Card deployment.

use crate::core::{GameState, InstanceId, Side};
use crate::error::{ActionError, Result};
use crate::triggers::{AbilityRegistry, TriggerEvent};
use crate::zones::{Zone, ZonePosition};

/// Check that `side` may play `card` from hand.
pub fn validate_play(state: &GameState, side: Side, card: InstanceId) -> Result<()> {
    if state.is_over() {
        return Err(ActionError::GameOver);
    }

    let own = state.side(side);
    let card = own.hand_card(card).ok_or(ActionError::NotInHand(card))?;
    if card.cost() > own.pixels {
        return Err(ActionError::InsufficientPixels {
            name: card.name().to_string(),
            cost: card.cost(),
            available: own.pixels,
        });
    }

    Ok(())
}

/// Move `card` from `side`'s hand to its field, paying its cost.
///
/// The deployed card cannot attack until its owner's next turn. Fires the
/// card's `OnPlay` ability after it lands.
pub fn play_card(
    state: &mut GameState,
    abilities: &AbilityRegistry,
    side: Side,
    card: InstanceId,
) -> Result<()> {
    validate_play(state, side, card)?;

    let own = state.side_mut(side);
    let mut played = own.zones.take(Zone::Hand, card).ok_or(ActionError::NotInHand(card))?;
    own.pixels -= played.cost();
    played.summon_sick();
    own.zones.put(Zone::Field, played.clone(), ZonePosition::Bottom);
    let remaining = own.pixels;

    let line = match side {
        Side::Player => format!(
            "You played {} ({} pixels). {} pixels left.",
            played.name(),
            played.cost(),
            remaining
        ),
        Side::Opponent => format!(
            "Opponent plays {} ({} pixels). {} pixels left.",
            played.name(),
            played.cost(),
            remaining
        ),
    };
    state.narrate(line);

    abilities.fire(state, &played, side, TriggerEvent::OnPlay);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardInstance};
    use crate::core::{GameRng, PlayerState};

    fn state_with_hand(pixels: u32) -> GameState {
        let mut state = GameState::new(
            PlayerState::new("player", "Player", 20, pixels),
            PlayerState::new("ai", "Opponent", 20, pixels),
            GameRng::new(9),
        );
        let card = CardInstance::new(InstanceId(1), CardDefinition::new("mario-011", "Mario", 3, 3, 5));
        state.side_mut(Side::Player).zones.put(Zone::Hand, card, ZonePosition::Bottom);
        state
    }

    #[test]
    fn test_play_pays_and_deploys() {
        let mut state = state_with_hand(4);

        play_card(&mut state, &AbilityRegistry::new(), Side::Player, InstanceId(1)).unwrap();

        let player = state.player();
        assert_eq!(player.pixels, 1);
        assert!(player.hand().is_empty());
        let card = player.field_card(InstanceId(1)).unwrap();
        assert!(!card.can_attack);
        assert!(!card.has_attacked);
        assert_eq!(state.log.last(), Some("You played Mario (3 pixels). 1 pixels left."));
    }

    #[test]
    fn test_insufficient_pixels() {
        let mut state = state_with_hand(2);
        let before = state.clone();

        let err = play_card(&mut state, &AbilityRegistry::new(), Side::Player, InstanceId(1)).unwrap_err();

        assert_eq!(
            err,
            ActionError::InsufficientPixels {
                name: "Mario".to_string(),
                cost: 3,
                available: 2
            }
        );
        assert_eq!(state.sides, before.sides);
    }

    #[test]
    fn test_card_not_in_hand() {
        let state = state_with_hand(5);
        assert_eq!(
            validate_play(&state, Side::Opponent, InstanceId(1)),
            Err(ActionError::NotInHand(InstanceId(1)))
        );
    }
}
