//! Fork-join plain minimax on the rayon pool.
//!
//! Same tree and same scores as [`minimax`]; nodes with more than
//! `sequential_cutoff` plies remaining score their children as parallel
//! tasks instead of one after another.

use rayon::prelude::*;
use tracing::debug;

use crate::game_state::chess_types::Position;
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{minimax, minimax_root};
use crate::search::search_types::{no_moves_score, Role, RootBest, SearchStats};

pub struct ParallelMinimax<'a, S: BoardScorer + ?Sized> {
    pub scorer: &'a S,
    pub sequential_cutoff: u8,
}

impl<S: BoardScorer + ?Sized> ParallelMinimax<'_, S> {
    pub fn root(&self, position: &Position, depth: u8) -> (RootBest, SearchStats) {
        let mut stats = SearchStats::default();
        if depth <= self.sequential_cutoff {
            let best = minimax_root(position, depth, self.scorer, &mut stats);
            return (best, stats);
        }

        stats.nodes += 1;
        let moves = position.legal_moves();
        stats.tasks += moves.len() as u64;

        let scored: Vec<(i32, SearchStats)> = moves
            .par_iter()
            .map(|mv| self.node(&position.make_move(*mv), depth - 1, Role::Minimizer))
            .collect();

        let mut best = RootBest::default();
        for (mv, (score, child_stats)) in moves.into_iter().zip(scored) {
            debug!(mv = %mv, score, "root move scored");
            best.offer(mv, score);
            stats.merge(child_stats);
        }
        (best, stats)
    }

    pub fn node(&self, position: &Position, depth: u8, role: Role) -> (i32, SearchStats) {
        let mut stats = SearchStats::default();
        if depth <= self.sequential_cutoff {
            let score = minimax(position, depth, role, self.scorer, &mut stats);
            return (score, stats);
        }

        stats.nodes += 1;
        let moves = position.legal_moves();
        if moves.is_empty() {
            return (no_moves_score(role), stats);
        }
        stats.tasks += moves.len() as u64;

        let scored: Vec<(i32, SearchStats)> = moves
            .par_iter()
            .map(|mv| self.node(&position.make_move(*mv), depth - 1, role.opposite()))
            .collect();

        let mut best = match role {
            Role::Maximizer => i32::MIN,
            Role::Minimizer => i32::MAX,
        };
        for (score, child_stats) in scored {
            best = match role {
                Role::Maximizer => best.max(score),
                Role::Minimizer => best.min(score),
            };
            stats.merge(child_stats);
        }
        (best, stats)
    }
}
