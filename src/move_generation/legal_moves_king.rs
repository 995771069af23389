use crate::game_state::chess_rules::{king_start, rook_corners};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{emit_from, landing_squares};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_attacks;

/// King steps onto squares outside `unsafe_sq`.
pub fn generate_king_moves(position: &Position, unsafe_sq: Bitboard, out: &mut Vec<Move>) {
    let Some(from) = position.king_square(position.side_to_move) else {
        return;
    };
    emit_from(from, king_attacks(from) & landing_squares(position) & !unsafe_sq, out);
}

/// Castling moves, king-side first. Encoded as a two-file king move.
pub fn generate_castling_moves(position: &Position, unsafe_sq: Bitboard, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let king_from = king_start(side);
    if position.pieces_of(side, PieceKind::King) & square_bit(king_from) == 0 {
        return;
    }

    let occupied = position.occupied();
    let rooks = position.pieces_of(side, PieceKind::Rook);
    let (kingside_rook, queenside_rook) = rook_corners(side);

    // The king's path (start, crossed, landing) must be safe; b1/b8 need only be empty.
    if position.has_castling_right(kingside_right(side)) && rooks & square_bit(kingside_rook) != 0 {
        let between = square_bit(king_from + 1) | square_bit(king_from + 2);
        let path = square_bit(king_from) | between;
        if occupied & between == 0 && unsafe_sq & path == 0 {
            out.push(Move::normal(king_from, king_from + 2));
        }
    }

    if position.has_castling_right(queenside_right(side)) && rooks & square_bit(queenside_rook) != 0 {
        let between = square_bit(king_from - 1) | square_bit(king_from - 2) | square_bit(king_from - 3);
        let path = square_bit(king_from) | square_bit(king_from - 1) | square_bit(king_from - 2);
        if occupied & between == 0 && unsafe_sq & path == 0 {
            out.push(Move::normal(king_from, king_from - 2));
        }
    }
}
