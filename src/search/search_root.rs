//! Search entry point: dispatches on the configured algorithm and times it.

use std::time::Instant;

use tracing::info;

use crate::game_state::chess_types::Position;
use crate::search::alpha_beta::alpha_beta_root;
use crate::search::board_scoring::{BoardScorer, NO_MOVES_SCORE};
use crate::search::minimax::minimax_root;
use crate::search::parallel_alpha_beta::ParallelSearch;
use crate::search::parallel_minimax::ParallelMinimax;
use crate::search::search_config::{SearchAlgorithm, SearchConfig};
use crate::search::search_types::{RootBest, SearchOutcome, SearchStats};

/// Fixed-depth search of `position`.
///
/// Parallel work runs on whichever rayon pool is current, so callers that own
/// a pool wrap this in `ThreadPool::install`. A root without legal moves
/// yields `best_move: None` and a losing score.
pub fn run_search<S: BoardScorer + ?Sized>(
    position: &Position,
    config: &SearchConfig,
    scorer: &S,
) -> SearchOutcome {
    let depth = config.effective_depth();
    let started = Instant::now();

    let (best, stats) = match config.algorithm {
        SearchAlgorithm::Minimax => {
            let mut stats = SearchStats::default();
            (minimax_root(position, depth, scorer, &mut stats), stats)
        }
        SearchAlgorithm::ParallelMinimax => ParallelMinimax {
            scorer,
            sequential_cutoff: config.sequential_cutoff,
        }
        .root(position, depth),
        SearchAlgorithm::AlphaBeta => {
            let mut stats = SearchStats::default();
            (alpha_beta_root(position, depth, scorer, &mut stats), stats)
        }
        SearchAlgorithm::ParallelAlphaBeta => ParallelSearch {
            scorer,
            sequential_cutoff: config.sequential_cutoff,
            bound_sharing: config.bound_sharing,
        }
        .root(position, depth),
    };

    let RootBest { best_move, score } = best;
    let score = if best_move.is_some() { score } else { -NO_MOVES_SCORE };
    let elapsed = started.elapsed();

    info!(
        algorithm = %config.algorithm,
        depth,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        tasks = stats.tasks,
        elapsed_ms = elapsed.as_millis() as u64,
        best = %best_move.map_or_else(|| "0000".to_owned(), |mv| mv.to_string()),
        score,
        "search finished"
    );

    SearchOutcome {
        best_move,
        score,
        depth,
        stats,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::search_config::BoundSharing;
    use crate::utils::random_opening::random_opening;

    fn config(algorithm: SearchAlgorithm, depth: u8) -> SearchConfig {
        SearchConfig {
            algorithm,
            depth,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn all_algorithms_agree_at_depth_four() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..3 {
            let position = random_opening(&mut rng, 10);
            let reference = run_search(&position, &config(SearchAlgorithm::Minimax, 4), &MaterialScorer);
            let par_minimax =
                run_search(&position, &config(SearchAlgorithm::ParallelMinimax, 4), &MaterialScorer);
            let ab = run_search(&position, &config(SearchAlgorithm::AlphaBeta, 4), &MaterialScorer);
            let par = run_search(
                &position,
                &config(SearchAlgorithm::ParallelAlphaBeta, 4),
                &MaterialScorer,
            );
            let eager = run_search(
                &position,
                &SearchConfig {
                    bound_sharing: BoundSharing::Eager,
                    ..config(SearchAlgorithm::ParallelAlphaBeta, 4)
                },
                &MaterialScorer,
            );

            assert_eq!(par_minimax.stats.nodes, reference.stats.nodes);
            for outcome in [&par_minimax, &ab, &par, &eager] {
                assert_eq!(outcome.score, reference.score, "{}", position.get_fen());
                assert_eq!(outcome.best_move, reference.best_move, "{}", position.get_fen());
            }
            assert!(ab.stats.nodes <= reference.stats.nodes);
            assert!(par.stats.nodes <= reference.stats.nodes);
            assert!(par.stats.tasks > 0);
        }
    }

    #[test]
    fn depth_zero_searches_one_ply() {
        let outcome = run_search(&Position::new_game(), &config(SearchAlgorithm::AlphaBeta, 0), &MaterialScorer);
        assert_eq!(outcome.depth, 1);
        assert!(outcome.best_move.is_some());
        assert_eq!(outcome.stats.leaves, 20);
    }

    #[test]
    fn empty_root_reports_no_move() {
        let mated = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("valid FEN");
        for algorithm in [
            SearchAlgorithm::Minimax,
            SearchAlgorithm::ParallelMinimax,
            SearchAlgorithm::AlphaBeta,
            SearchAlgorithm::ParallelAlphaBeta,
        ] {
            let outcome = run_search(&mated, &config(algorithm, 3), &MaterialScorer);
            assert_eq!(outcome.best_move, None);
            assert_eq!(outcome.score, -NO_MOVES_SCORE);
        }
    }
}
