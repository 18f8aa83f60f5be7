//! End-to-end scenarios through the public entry points.
//!
//! Each scenario starts from a built game and drives it the way the
//! presentation layer would: play, declare, attack, end turn.

use pixel_forge::cards::{CardCatalog, CardDefinition, CardInstance};
use pixel_forge::core::{CombatPhase, GameState, InstanceId, Side, TurnPhase};
use pixel_forge::games::pixel_forge::PixelForgeBuilder;
use pixel_forge::zones::{Zone, ZonePosition};
use pixel_forge::PixelForge;

fn reference_game(seed: u64) -> (PixelForge, GameState) {
    PixelForgeBuilder::new().build(seed)
}

/// Put a fresh instance of `definition` into `side`'s `zone`.
fn give(state: &mut GameState, side: Side, zone: Zone, definition: CardDefinition, ready: bool) -> InstanceId {
    let id = state.ids.alloc();
    let mut card = CardInstance::new(id, definition);
    if ready {
        card.ready();
    }
    state.side_mut(side).zones.put(zone, card, ZonePosition::Bottom);
    id
}

/// Scenario A: a fresh game deals 3 cards from a 15-card deck to each side.
#[test]
fn test_fresh_game_setup() {
    let (_, state) = reference_game(42);

    for side in Side::ALL {
        let own = state.side(side);
        assert_eq!(own.hand().len(), 3, "{} hand", side);
        assert_eq!(own.deck().len(), 12, "{} deck", side);
        assert!(own.field().is_empty());
        assert!(own.graveyard().is_empty());
        assert_eq!(own.health, 20);
        assert_eq!(own.pixels, 1);
        assert_eq!(own.max_pixels, 1);
    }

    assert_eq!(state.turn, TurnPhase::PlayerTurn);
    assert_eq!(state.turn_count, 1);
    assert_eq!(state.winner, None);
    assert_eq!(state.combat, CombatPhase::None);
    assert_eq!(state.log.iter().next(), Some("The battle begins! You go first."));
}

/// Scenario B: playing a 1-cost 3/5 card with 1 pixel.
#[test]
fn test_play_one_cost_card() {
    let (game, mut state) = reference_game(42);
    let card = give(
        &mut state,
        Side::Player,
        Zone::Hand,
        CardDefinition::new("brawler-900", "Brawler", 1, 3, 5),
        false,
    );

    game.play_card(&mut state, card).unwrap();

    let player = state.player();
    assert_eq!(player.pixels, 0);
    assert!(player.hand_card(card).is_none());
    let deployed = player.field_card(card).unwrap();
    assert!(!deployed.can_attack);
    assert!(!deployed.has_attacked);
    assert_eq!(state.log.last(), Some("You played Brawler (1 pixels). 0 pixels left."));
}

/// Scenario C: a 3/4 attacker into a 5/6 defender.
#[test]
fn test_losing_clash() {
    let (game, mut state) = reference_game(42);
    let attacker = give(
        &mut state,
        Side::Player,
        Zone::Field,
        CardDefinition::new("squire-901", "Squire", 2, 3, 4),
        true,
    );
    let defender = give(
        &mut state,
        Side::Opponent,
        Zone::Field,
        CardDefinition::new("golem-902", "Golem", 5, 5, 6),
        false,
    );

    game.declare_attacker(&mut state, attacker).unwrap();
    assert_eq!(state.combat, CombatPhase::AwaitingTarget);

    let outcome = game.resolve_attack(&mut state, Some(defender)).unwrap();

    assert!(outcome.attacker_died());
    assert!(!outcome.target_died());
    assert!(state.player().field_card(attacker).is_none());
    let dead = state.player().graveyard().last().unwrap();
    assert_eq!(dead.instance_id, attacker);
    assert_eq!(dead.current_health, 0);
    assert_eq!(state.opponent().field_card(defender).unwrap().current_health, 3);
    assert_eq!(state.combat, CombatPhase::None);
    assert_eq!(state.selected_attacker, None);
}

/// Scenario D: a return-to-hand card dies and comes back restored.
#[test]
fn test_link_returns_to_hand() {
    let (game, mut state) = reference_game(42);
    let catalog = CardCatalog::reference();
    let link_def = catalog.get(&"link-001".into()).unwrap().clone();
    let base_health = link_def.health;

    let link = give(&mut state, Side::Player, Zone::Field, link_def, true);
    let wall = give(
        &mut state,
        Side::Opponent,
        Zone::Field,
        CardDefinition::new("wall-903", "Wall", 5, 9, 9),
        false,
    );

    game.declare_attacker(&mut state, link).unwrap();
    game.resolve_attack(&mut state, Some(wall)).unwrap();

    let player = state.player();
    assert_eq!(player.zones.locate(link), Some(Zone::Hand));
    let back = player.hand_card(link).unwrap();
    assert_eq!(back.current_health, base_health);
    assert!(!back.can_attack && !back.has_attacked);
    assert!(player.field_card(link).is_none());
    assert!(player.graveyard().iter().all(|c| c.instance_id != link));
}

/// Scenario E: an opponent that can afford nothing and has no field still
/// completes its turn with accrual and a draw.
#[test]
fn test_idle_opponent_turn() {
    let expensive = CardCatalog::from_definitions(
        (0..20).map(|i| CardDefinition::new(format!("titan-{}", i), format!("Titan {}", i), 9, 9, 9)),
    )
    .unwrap();
    let (game, mut state) = PixelForgeBuilder::new().catalog(expensive).build(42);

    let actions = game.end_turn(&mut state).unwrap();

    assert!(actions.is_empty());
    let opponent = state.opponent();
    assert_eq!(opponent.max_pixels, 2);
    assert_eq!(opponent.pixels, 2);
    assert_eq!(opponent.hand().len(), 4);
    assert_eq!(opponent.deck().len(), 11);
    assert!(opponent.field().is_empty());
    assert_eq!(state.turn, TurnPhase::PlayerTurn);
    assert_eq!(state.turn_count, 2);
}

/// Weakest opposing field card, or `None` for a direct attack.
fn weakest_enemy(state: &GameState) -> Option<InstanceId> {
    state
        .opponent()
        .field()
        .iter()
        .min_by_key(|card| card.current_health)
        .map(|card| card.instance_id)
}

/// A whole game between a greedy player (attacking the weakest enemy card,
/// or directly into an empty field) and the scripted opponent terminates
/// with a winner.
#[test]
fn test_game_runs_to_completion() {
    let (game, mut state) = reference_game(3);

    for _ in 0..200 {
        if state.is_over() {
            break;
        }

        let playable: Vec<_> = state.player().playable().map(|c| c.instance_id).collect();
        for card in playable {
            // Earlier plays may have spent the pixels or shuffled the card away
            let _ = game.play_card(&mut state, card);
        }

        let attackers: Vec<_> = state.player().ready_attackers().map(|c| c.instance_id).collect();
        for attacker in attackers {
            if state.is_over() {
                break;
            }
            // An earlier clash may have cost us this attacker
            if game.declare_attacker(&mut state, attacker).is_ok() {
                let target = weakest_enemy(&state);
                game.resolve_attack(&mut state, target).unwrap();
            }
        }

        if !state.is_over() {
            game.end_turn(&mut state).unwrap();
        }
    }

    assert!(state.is_over());
    assert!(state.winner.is_some());
    assert_eq!(state.turn, TurnPhase::Ended);
    assert!(state.player().health == 0 || state.opponent().health == 0);
}
