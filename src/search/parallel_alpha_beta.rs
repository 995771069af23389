//! Fork-join alpha-beta on the rayon pool.
//!
//! Nodes with more than `sequential_cutoff` plies remaining fork one task per
//! legal move and join them all; smaller subtrees run [`alpha_beta`] on the
//! current worker with the window they inherited. Statistics from each task
//! travel back with its score and are merged at the join.

use std::sync::Mutex;

use rayon::prelude::*;
use tracing::debug;

use crate::game_state::chess_types::Position;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{alpha_beta, alpha_beta_root};
use crate::search::board_scoring::BoardScorer;
use crate::search::search_config::BoundSharing;
use crate::search::search_types::{no_moves_score, Role, RootBest, SearchStats, Window};

/// Read-only settings shared by every task of one search.
pub struct ParallelSearch<'a, S: BoardScorer + ?Sized> {
    pub scorer: &'a S,
    pub sequential_cutoff: u8,
    pub bound_sharing: BoundSharing,
}

impl<S: BoardScorer + ?Sized> ParallelSearch<'_, S> {
    /// Root search. Every root child is searched with the full window, so the
    /// root score and move match minimax regardless of bound sharing.
    pub fn root(&self, position: &Position, depth: u8) -> (RootBest, SearchStats) {
        let mut stats = SearchStats::default();
        if depth <= self.sequential_cutoff {
            let best = alpha_beta_root(position, depth, self.scorer, &mut stats);
            return (best, stats);
        }

        stats.nodes += 1;
        let moves = position.legal_moves();
        stats.tasks += moves.len() as u64;

        let scored: Vec<(i32, SearchStats)> = moves
            .par_iter()
            .map(|mv| self.node(&position.make_move(*mv), depth - 1, Role::Minimizer, Window::FULL))
            .collect();

        let mut best = RootBest::default();
        for (mv, (score, child_stats)) in moves.into_iter().zip(scored) {
            debug!(mv = %mv, score, "root move scored");
            best.offer(mv, score);
            stats.merge(child_stats);
        }
        (best, stats)
    }

    /// Scores one node; the result obeys the same fail-soft contract as
    /// [`alpha_beta`] with respect to `window`.
    pub fn node(&self, position: &Position, depth: u8, role: Role, window: Window) -> (i32, SearchStats) {
        let mut stats = SearchStats::default();
        if depth <= self.sequential_cutoff {
            let score = alpha_beta(position, depth, role, window, self.scorer, &mut stats);
            return (score, stats);
        }

        stats.nodes += 1;
        let moves = position.legal_moves();
        if moves.is_empty() {
            return (no_moves_score(role), stats);
        }
        stats.tasks += moves.len() as u64;

        let results: Vec<Option<(i32, SearchStats)>> = match self.bound_sharing {
            BoundSharing::FoldAtJoin => moves
                .par_iter()
                .map(|mv| Some(self.node(&position.make_move(*mv), depth - 1, role.opposite(), window)))
                .collect(),
            BoundSharing::Eager => {
                let shared = Mutex::new(window);
                moves
                    .par_iter()
                    .map(|mv| self.eager_child(position, *mv, depth, role, window, &shared))
                    .collect()
            }
        };

        let mut best = match role {
            Role::Maximizer => i32::MIN,
            Role::Minimizer => i32::MAX,
        };
        let mut folded = window;
        let mut cut = false;
        for (score, child_stats) in results.into_iter().flatten() {
            stats.merge(child_stats);
            best = match role {
                Role::Maximizer => best.max(score),
                Role::Minimizer => best.min(score),
            };
            folded.tighten(role, score);
            cut |= folded.is_closed();
        }
        if cut {
            stats.cutoffs += 1;
        }
        (best, stats)
    }

    /// One sibling under eager sharing: skipped when the shared window has
    /// already closed, otherwise searched and folded into it.
    fn eager_child(
        &self,
        position: &Position,
        mv: Move,
        depth: u8,
        role: Role,
        inherited: Window,
        shared: &Mutex<Window>,
    ) -> Option<(i32, SearchStats)> {
        let current = match shared.lock() {
            Ok(guard) => *guard,
            Err(_) => inherited,
        };
        if current.is_closed() {
            return None;
        }

        let result = self.node(&position.make_move(mv), depth - 1, role.opposite(), current);
        if let Ok(mut guard) = shared.lock() {
            guard.tighten(role, result.0);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::minimax::minimax_root;
    use crate::utils::random_opening::random_opening;

    fn searcher(cutoff: u8, sharing: BoundSharing) -> ParallelSearch<'static, MaterialScorer> {
        ParallelSearch {
            scorer: &MaterialScorer,
            sequential_cutoff: cutoff,
            bound_sharing: sharing,
        }
    }

    #[test]
    fn matches_minimax_under_both_sharing_modes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..8 {
            let position = random_opening(&mut rng, 8);
            let mut mm_stats = SearchStats::default();
            let expected = minimax_root(&position, 3, &MaterialScorer, &mut mm_stats);
            for sharing in [BoundSharing::FoldAtJoin, BoundSharing::Eager] {
                for cutoff in [0, 1, 2] {
                    let (best, stats) = searcher(cutoff, sharing).root(&position, 3);
                    assert_eq!(best.score, expected.score, "{} {sharing:?} cutoff {cutoff}", position.get_fen());
                    assert_eq!(best.best_move, expected.best_move, "{} {sharing:?} cutoff {cutoff}", position.get_fen());
                    assert!(stats.nodes <= mm_stats.nodes);
                }
            }
        }
    }

    #[test]
    fn shallow_search_stays_sequential() {
        let (_, stats) = searcher(2, BoundSharing::FoldAtJoin).root(&Position::new_game(), 2);
        assert_eq!(stats.tasks, 0);
    }

    #[test]
    fn forks_one_task_per_move_above_cutoff() {
        let (_, stats) = searcher(2, BoundSharing::FoldAtJoin).root(&Position::new_game(), 3);
        assert_eq!(stats.tasks, 20);

        let (_, stats) = searcher(1, BoundSharing::FoldAtJoin).root(&Position::new_game(), 3);
        assert_eq!(stats.tasks, 20 + 400);
    }

    #[test]
    fn fold_at_join_is_deterministic() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("valid FEN");
        let search = searcher(1, BoundSharing::FoldAtJoin);
        let first = search.root(&position, 3);
        let second = search.root(&position, 3);
        assert_eq!(first.0.best_move, second.0.best_move);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn mated_interior_node_scores_as_loss() {
        // After Ra8 black has no moves; the root sees a win for white.
        let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("valid FEN");
        let (best, _) = searcher(0, BoundSharing::Eager).root(&position, 2);
        assert_eq!(best.best_move.map(|mv| mv.to_string()), Some("a1a8".to_owned()));
        assert_eq!(best.score, crate::search::board_scoring::NO_MOVES_SCORE);
    }
}
