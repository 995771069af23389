use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{emit_piece_moves, landing_squares};
use crate::moves::chess_move::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(position: &Position, out: &mut Vec<Move>) {
    let queens = position.pieces_of(position.side_to_move, PieceKind::Queen);
    let occupancy = position.occupied();
    emit_piece_moves(
        queens,
        landing_squares(position),
        |from| queen_attacks(from, occupancy),
        out,
    );
}
