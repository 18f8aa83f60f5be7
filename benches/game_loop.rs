//! Benchmarks for the Pixel Forge game loop.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_forge::{GameRng, GameState, PixelForge, RandomOpponent, RulesEngine, ScriptedOpponent};

/// Greedy player: play everything affordable, attack the weakest enemy card
/// (or directly into an empty field) with every ready card, end the turn.
/// Returns the number of rounds played.
fn play_out(game: &PixelForge, state: &mut GameState) -> u32 {
    let mut rounds = 0;
    while !state.is_over() && rounds < 200 {
        let playable: Vec<_> = state.player().playable().map(|c| c.instance_id).collect();
        for card in playable {
            let _ = game.play_card(state, card);
        }

        let attackers: Vec<_> = state.player().ready_attackers().map(|c| c.instance_id).collect();
        for attacker in attackers {
            if game.declare_attacker(state, attacker).is_ok() {
                let target = state
                    .opponent()
                    .field()
                    .iter()
                    .min_by_key(|card| card.current_health)
                    .map(|card| card.instance_id);
                let _ = game.resolve_attack(state, target);
            }
        }

        if !state.is_over() {
            let _ = game.end_turn(state);
        }
        rounds += 1;
    }
    rounds
}

fn benchmark_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Game");

    let (scripted, _) = PixelForge::builder().policy(ScriptedOpponent).build(0);
    let (random, _) = PixelForge::builder().policy(RandomOpponent).build(0);

    for (name, game) in [("scripted", &scripted), ("random", &random)] {
        group.bench_with_input(BenchmarkId::new("opponent", name), game, |b, game| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut state = game.new_game(GameRng::new(seed));
                black_box(play_out(game, &mut state))
            });
        });
    }
    group.finish();
}

fn benchmark_opponent_turn(c: &mut Criterion) {
    let (game, state) = PixelForge::builder().build(7);

    c.bench_function("end_turn", |b| {
        b.iter(|| {
            let mut state = state.clone();
            black_box(game.end_turn(&mut state).map(|actions| actions.len()))
        });
    });
}

fn benchmark_legal_actions(c: &mut Criterion) {
    let (game, mut state) = PixelForge::builder().build(11);
    for _ in 0..4 {
        let _ = game.end_turn(&mut state);
    }

    c.bench_function("legal_actions", |b| {
        b.iter(|| black_box(game.legal_actions(&state, pixel_forge::Side::Player).len()));
    });
}

fn benchmark_state_clone(c: &mut Criterion) {
    let (game, mut state) = PixelForge::builder().build(3);
    play_out(&game, &mut state);

    c.bench_function("state_clone", |b| {
        b.iter(|| black_box(state.clone()));
    });
}

criterion_group!(
    benches,
    benchmark_full_game,
    benchmark_opponent_turn,
    benchmark_legal_actions,
    benchmark_state_clone
);
criterion_main!(benches);
