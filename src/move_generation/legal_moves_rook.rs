use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{emit_piece_moves, landing_squares};
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(position: &Position, out: &mut Vec<Move>) {
    let rooks = position.pieces_of(position.side_to_move, PieceKind::Rook);
    let occupancy = position.occupied();
    emit_piece_moves(
        rooks,
        landing_squares(position),
        |from| rook_attacks(from, occupancy),
        out,
    );
}
