//! Sequential fail-soft alpha-beta.
//!
//! Scores are always from the maximizer's point of view; the maximizer raises
//! `alpha`, the minimizer lowers `beta`, and siblings stop once they cross.

use tracing::debug;

use crate::game_state::chess_types::Position;
use crate::search::board_scoring::BoardScorer;
use crate::search::search_types::{no_moves_score, Role, RootBest, SearchStats, Window};

pub fn alpha_beta<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    role: Role,
    mut window: Window,
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

    let mut best = match role {
        Role::Maximizer => i32::MIN,
        Role::Minimizer => i32::MAX,
    };

    for mv in moves {
        let score = alpha_beta(
            &position.make_move(mv),
            depth - 1,
            role.opposite(),
            window,
            scorer,
            stats,
        );
        best = match role {
            Role::Maximizer => best.max(score),
            Role::Minimizer => best.min(score),
        };
        window.tighten(role, score);
        if window.is_closed() {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Root search. Later root moves are searched against the best score so far;
/// only a strictly better exact score can replace the current best.
pub fn alpha_beta_root<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    scorer: &S,
    stats: &mut SearchStats,
) -> RootBest {
    stats.nodes += 1;
    let child_depth = depth.saturating_sub(1);
    let mut window = Window::FULL;
    let mut best = RootBest::default();

    for mv in position.legal_moves() {
        let score = alpha_beta(
            &position.make_move(mv),
            child_depth,
            Role::Minimizer,
            window,
            scorer,
            stats,
        );
        debug!(mv = %mv, score, "root move scored");
        best.offer(mv, score);
        window.tighten(Role::Maximizer, score);
    }

    best
}
