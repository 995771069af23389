use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bitfork_chess::game_state::chess_types::Position;
use bitfork_chess::search::board_scoring::MaterialScorer;
use bitfork_chess::search::search_config::{BoundSharing, SearchAlgorithm, SearchConfig};
use bitfork_chess::search::search_root::run_search;
use bitfork_chess::utils::random_opening::random_opening;

const SEARCH_DEPTH: u8 = 4;
const OPENING_PLIES: usize = 8;
const POSITIONS: usize = 4;

fn variants() -> [(&'static str, SearchConfig); 5] {
    let base = SearchConfig::with_depth(SEARCH_DEPTH);
    [
        ("minimax", SearchConfig { algorithm: SearchAlgorithm::Minimax, ..base }),
        (
            "parallel_minimax",
            SearchConfig { algorithm: SearchAlgorithm::ParallelMinimax, ..base },
        ),
        ("alpha_beta", SearchConfig { algorithm: SearchAlgorithm::AlphaBeta, ..base }),
        (
            "parallel_fold",
            SearchConfig {
                algorithm: SearchAlgorithm::ParallelAlphaBeta,
                bound_sharing: BoundSharing::FoldAtJoin,
                ..base
            },
        ),
        (
            "parallel_eager",
            SearchConfig {
                algorithm: SearchAlgorithm::ParallelAlphaBeta,
                bound_sharing: BoundSharing::Eager,
                ..base
            },
        ),
    ]
}

fn bench_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let positions: Vec<Position> = (0..POSITIONS)
        .map(|_| random_opening(&mut rng, OPENING_PLIES))
        .collect();

    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(10);

    for (idx, position) in positions.iter().enumerate() {
        // Every variant must agree with plain minimax before it is timed.
        let reference = run_search(position, &variants()[0].1, &MaterialScorer);
        for (name, config) in variants() {
            let outcome = run_search(position, &config, &MaterialScorer);
            assert_eq!(outcome.score, reference.score, "{name} disagrees on position {idx}");
            assert_eq!(outcome.best_move, reference.best_move, "{name} picks another move");

            group.bench_with_input(BenchmarkId::new(name, idx), position, |b, position| {
                b.iter(|| black_box(run_search(black_box(position), &config, &MaterialScorer).score))
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
