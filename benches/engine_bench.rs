use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use manhunt::ai::AiRegistry;
use manhunt::board::{new_game, GameState, StationGraph};
use manhunt::movegen::{legal_moves, random_move};
use manhunt::protocol::parse_graph;
use manhunt::selfplay::{game_rng, play_game, SelfPlayConfig};

const DEMO: &str = include_str!("../data/demo.txt");

fn demo_graph() -> Arc<StationGraph> {
    Arc::new(parse_graph(DEMO).unwrap())
}

fn opening() -> GameState {
    let mut rng = SmallRng::seed_from_u64(7);
    new_game(demo_graph(), 5, 24, &mut rng).unwrap()
}

/// First position with the detectives to move.
fn detectives_turn() -> GameState {
    let state = opening();
    let mv = state.available_moves()[0];
    state.advance(mv).unwrap()
}

fn bench_parse_graph(c: &mut Criterion) {
    c.bench_function("parse_demo_board", |b| {
        b.iter(|| parse_graph(black_box(DEMO)))
    });
}

fn bench_movegen_mr_x(c: &mut Criterion) {
    let state = opening();
    c.bench_function("movegen_mr_x_opening", |b| {
        b.iter(|| {
            legal_moves(
                black_box(state.setup()),
                black_box(state.mr_x()),
                black_box(state.detectives()),
                black_box(state.remaining()),
                black_box(state.travel_log().len()),
            )
        })
    });
}

fn bench_movegen_detectives(c: &mut Criterion) {
    let state = detectives_turn();
    c.bench_function("movegen_five_detectives", |b| {
        b.iter(|| {
            legal_moves(
                black_box(state.setup()),
                black_box(state.mr_x()),
                black_box(state.detectives()),
                black_box(state.remaining()),
                black_box(state.travel_log().len()),
            )
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let state = opening();
    let mv = state.available_moves()[0];
    c.bench_function("advance_mr_x", |b| {
        b.iter(|| black_box(&state).advance(black_box(mv)))
    });

    let state = detectives_turn();
    let mv = state.available_moves()[0];
    c.bench_function("advance_detective", |b| {
        b.iter(|| black_box(&state).advance(black_box(mv)))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let start = opening();
    c.bench_function("random_playout", |b| {
        let mut rng = SmallRng::seed_from_u64(11);
        b.iter(|| {
            let mut state = start.clone();
            while let Some(mv) = random_move(state.available_moves(), &mut rng) {
                state = state.advance(mv).unwrap();
            }
            black_box(state)
        })
    });
}

fn bench_greedy_game(c: &mut Criterion) {
    let graph = demo_graph();
    let registry = AiRegistry::with_builtins();
    let config = SelfPlayConfig {
        seed: 1,
        ..SelfPlayConfig::default()
    };

    let mut group = c.benchmark_group("selfplay");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("greedy_vs_greedy", |b| {
        let mut id = 0;
        b.iter(|| {
            id += 1;
            let mut rng = game_rng(config.seed, id);
            play_game(&config, &graph, &registry, id, &mut rng)
        })
    });
    group.finish();
}

fn bench_game_state_clone(c: &mut Criterion) {
    let state = detectives_turn();
    c.bench_function("game_state_clone", |b| {
        b.iter(|| black_box(&state).clone())
    });
}

criterion_group!(
    benches,
    bench_parse_graph,
    bench_movegen_mr_x,
    bench_movegen_detectives,
    bench_advance,
    bench_random_playout,
    bench_greedy_game,
    bench_game_state_clone,
);
criterion_main!(benches);
