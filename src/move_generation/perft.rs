//! Perft: exhaustive legal-move tree counting for generator validation.

use rayon::prelude::*;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::castle_rook_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

/// Leaf counts; the move-type tallies describe the final ply only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(mut self, rhs: PerftCounts) -> PerftCounts {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self
    }

    fn leaf(position: &Position, mv: Move) -> PerftCounts {
        let mover = position.side_to_move;
        let enemy_occ = position.occupancy(mover.opposite());
        PerftCounts {
            nodes: 1,
            captures: usize::from(mv.is_en_passant() || enemy_occ & square_bit(mv.to()) != 0),
            en_passant: usize::from(mv.is_en_passant()),
            castles: usize::from(
                castle_rook_move(position.pieces_of(mover, PieceKind::King), mv).is_some(),
            ),
            promotions: usize::from(mv.promotion_piece().is_some()),
        }
    }
}

pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generate_legal_moves(position);
    if depth == 1 {
        return moves
            .iter()
            .fold(PerftCounts::default(), |acc, mv| acc.merge(PerftCounts::leaf(position, *mv)));
    }

    moves.iter().fold(PerftCounts::default(), |acc, mv| {
        acc.merge(perft(&position.make_move(*mv), depth - 1))
    })
}

/// Same totals as [`perft`], with root subtrees counted on the rayon pool.
pub fn perft_parallel(position: &Position, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(position, depth);
    }

    position
        .legal_moves()
        .par_iter()
        .map(|mv| perft(&position.make_move(*mv), depth - 1))
        .reduce(PerftCounts::default, PerftCounts::merge)
}

/// Node count below each root move, in generator order.
pub fn divide(position: &Position, depth: u8) -> Vec<(Move, usize)> {
    let child_depth = depth.saturating_sub(1);
    position
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, perft(&position.make_move(mv), child_depth).nodes))
        .collect()
}
