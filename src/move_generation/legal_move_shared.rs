//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{source_of, PawnOffset};

/// Iterates the set squares of a bitboard in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct Squares(pub Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }
}

/// Squares a piece of the side to move may land on: empty or enemy-occupied,
/// never the enemy king.
#[inline]
pub fn landing_squares(position: &Position) -> Bitboard {
    let side = position.side_to_move;
    !position.occupancy(side) & !position.pieces_of(side.opposite(), PieceKind::King)
}

/// Enemy pieces that can be captured (everything but the king).
#[inline]
pub fn capture_targets(position: &Position) -> Bitboard {
    let enemy = position.side_to_move.opposite();
    position.occupancy(enemy) & !position.pieces_of(enemy, PieceKind::King)
}

/// Pushes one normal move per target square, ascending.
#[inline]
pub fn emit_from(from: Square, targets: Bitboard, out: &mut Vec<Move>) {
    out.extend(Squares(targets).map(|to| Move::normal(from, to)));
}

/// Emits moves for every piece on `pieces`, using `attacks` for the target set.
pub fn emit_piece_moves<F>(pieces: Bitboard, allowed: Bitboard, attacks: F, out: &mut Vec<Move>)
where
    F: Fn(Square) -> Bitboard,
{
    for from in Squares(pieces) {
        emit_from(from, attacks(from) & allowed, out);
    }
}

/// Normal moves for a set of pawn destinations sharing one offset.
#[inline]
pub fn emit_pawn_shift(destinations: Bitboard, offset: PawnOffset, out: &mut Vec<Move>) {
    out.extend(Squares(destinations).map(|to| Move::normal(source_of(to, offset), to)));
}

/// Four promotion moves per destination, queen first.
pub fn emit_pawn_promotions(destinations: Bitboard, offset: PawnOffset, out: &mut Vec<Move>) {
    for to in Squares(destinations) {
        let from = source_of(to, offset);
        out.extend(
            PieceKind::PROMOTIONS
                .into_iter()
                .map(|piece| Move::promotion(from, to, piece)),
        );
    }
}
