//! Plain minimax over the full legal-move tree.
//!
//! No pruning: every other search is checked against this one.

use tracing::debug;

use crate::game_state::chess_types::Position;
use crate::search::board_scoring::BoardScorer;
use crate::search::search_types::{no_moves_score, Role, RootBest, SearchStats};

pub fn minimax<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    role: Role,
    scorer: &S,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        return role.orient(scorer.score(position));
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        return no_moves_score(role);
    }

    let scores = moves
        .iter()
        .map(|mv| minimax(&position.make_move(*mv), depth - 1, role.opposite(), scorer, stats));

    // Non-empty, so the fallback is never used.
    match role {
        Role::Maximizer => scores.max().unwrap_or(i32::MIN),
        Role::Minimizer => scores.min().unwrap_or(i32::MAX),
    }
}

/// Scores every root move and keeps the first strictly-best one.
pub fn minimax_root<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    scorer: &S,
    stats: &mut SearchStats,
) -> RootBest {
    stats.nodes += 1;
    let child_depth = depth.saturating_sub(1);
    let mut best = RootBest::default();

    for mv in position.legal_moves() {
        let score = minimax(&position.make_move(mv), child_depth, Role::Minimizer, scorer, stats);
        debug!(mv = %mv, score, "root move scored");
        best.offer(mv, score);
    }

    best
}
