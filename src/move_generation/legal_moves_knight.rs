use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{emit_piece_moves, landing_squares};
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(position: &Position, out: &mut Vec<Move>) {
    let knights = position.pieces_of(position.side_to_move, PieceKind::Knight);
    emit_piece_moves(knights, landing_squares(position), knight_attacks, out);
}
