use criterion::{BatchSize, Bencher, Criterion, black_box, criterion_group, criterion_main};

use minichess_lib::processing::board::Board;
use minichess_lib::processing::debug::{NoTrace, Tracing};
use minichess_lib::processing::fixtures::{INITIAL_STATE_A, INITIAL_STATE_B, INITIAL_STATE_C};
use minichess_lib::processing::searching::MySearcher;

fn bench_search_position(b: &mut Bencher, board: &Board) {
    b.iter_batched(
        || (board.clone(), MySearcher::new(NoTrace::new())),
        |(board, mut searcher)| {
            black_box(searcher.find_best_move(&board));
        },
        BatchSize::PerIteration,
    )
}

fn bench_engine_search(c: &mut Criterion) {
    c.bench_function("Search Initial State A Depth 4", |b| {
        bench_search_position(b, &INITIAL_STATE_A);
    });
    c.bench_function("Search Initial State B Depth 4", |b| {
        bench_search_position(b, &INITIAL_STATE_B);
    });
    c.bench_function("Search Initial State C Depth 4", |b| {
        bench_search_position(b, &INITIAL_STATE_C);
    });
}

criterion_group!(benches, bench_engine_search);
criterion_main!(benches);
