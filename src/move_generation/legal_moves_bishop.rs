use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{emit_piece_moves, landing_squares};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(position: &Position, out: &mut Vec<Move>) {
    let bishops = position.pieces_of(position.side_to_move, PieceKind::Bishop);
    let occupancy = position.occupied();
    emit_piece_moves(
        bishops,
        landing_squares(position),
        |from| bishop_attacks(from, occupancy),
        out,
    );
}
