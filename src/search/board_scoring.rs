//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to [`BoardScorer`].

use crate::game_state::chess_types::*;

/// Magnitude reported for a node whose side to move has no legal moves.
///
/// Larger than any material total and far from `i32` limits.
pub const NO_MOVES_SCORE: i32 = 1_000_000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    #[inline]
    fn material(position: &Position, color: Color) -> i32 {
        PieceKind::ALL
            .into_iter()
            .map(|kind| position.pieces_of(color, kind).count_ones() as i32 * Self::piece_value(kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        let side = position.side_to_move;
        Self::material(position, side) - Self::material(position, side.opposite())
    }
}
