//! Benchmarks for move application and full games.
//!
//! The cascade loop is the hot path; the saturated-board case measures
//! its worst settling behavior short of the per-move cap.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use octacore::game::{run_match, RandomSource};
use octacore::{
    Coordinate, GameBoard, GameConfig, GameEngine, GraphBoard, Player,
};

fn fresh_engine(radius: i32) -> GameEngine {
    GameEngine::new(GraphBoard::new(radius), GameConfig::default())
        .expect("default config is valid")
}

/// Engine whose board sits one charge short of a full-board cascade.
fn saturated_engine(radius: i32) -> GameEngine {
    let mut board = GraphBoard::new(radius);
    for id in 0..board.count() {
        let threshold = u32::try_from(board.cell(id).neighbor_count()).expect("small count");
        let cell = board.cell_mut(id);
        cell.state = Player::One.owned();
        cell.charge = threshold;
    }
    let mut engine = fresh_engine(0);
    engine.install_board(board);
    engine
}

fn bench_single_move(c: &mut Criterion) {
    c.bench_function("single_move_r4", |b| {
        b.iter_batched(
            || fresh_engine(4),
            |mut engine| {
                let result = engine.make_move(black_box(Coordinate::new(0, 0)), Player::One);
                black_box(result)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_saturated_cascade(c: &mut Criterion) {
    // 81 cells, all of which explode at least once.
    c.bench_function("saturated_cascade_r4", |b| {
        b.iter_batched(
            || saturated_engine(4),
            |mut engine| {
                let result = engine.make_move(black_box(Coordinate::new(0, 0)), Player::One);
                black_box(result)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("random_game_r3", |b| {
        b.iter_batched(
            || {
                let config = GameConfig {
                    turn_limit: 100,
                    ..GameConfig::default()
                };
                GameEngine::new(GraphBoard::new(3), config).expect("valid config")
            },
            |mut engine| {
                let mut one = RandomSource::new(black_box(42));
                let mut two = RandomSource::new(black_box(43));
                let result = run_match(&mut engine, &mut one, &mut two);
                black_box(result)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_single_move,
    bench_saturated_cascade,
    bench_full_game
);
criterion_main!(benches);
