//! Pawn move emission.
//!
//! Order: single pushes, double pushes, captures toward h, captures toward a,
//! then promotions (straight, capture toward h, capture toward a) and finally
//! en-passant (toward h, then toward a).

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    capture_targets, emit_pawn_promotions, emit_pawn_shift, Squares,
};
use crate::moves::bitboard_masks::{RANK_3, RANK_4, RANK_5, RANK_6};
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::*;

pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let pawns = position.pieces_of(side, PieceKind::Pawn);
    if pawns == 0 {
        return;
    }

    let empty = !position.occupied();
    let targets = capture_targets(position);

    let (pushes, push_promotions) = split_promotions(side, single_pushes(side, pawns, empty));
    let doubles = double_pushes(side, pawns, empty);
    let (right, right_promotions) = split_promotions(side, captures_right(side, pawns, targets));
    let (left, left_promotions) = split_promotions(side, captures_left(side, pawns, targets));

    emit_pawn_shift(pushes, push_offset(side), out);
    emit_pawn_shift(doubles, double_push_offset(side), out);
    emit_pawn_shift(right, capture_right_offset(side), out);
    emit_pawn_shift(left, capture_left_offset(side), out);

    emit_pawn_promotions(push_promotions, push_offset(side), out);
    emit_pawn_promotions(right_promotions, capture_right_offset(side), out);
    emit_pawn_promotions(left_promotions, capture_left_offset(side), out);

    generate_en_passant(position, pawns, out);
}

fn generate_en_passant(position: &Position, pawns: Bitboard, out: &mut Vec<Move>) {
    if position.en_passant == 0 {
        return;
    }
    let side = position.side_to_move;
    let (capture_rank, target_rank) = match side {
        Color::Light => (RANK_5, RANK_6),
        Color::Dark => (RANK_4, RANK_3),
    };
    let capturers = pawns & capture_rank;
    let target = position.en_passant & target_rank;
    let enemy_pawns = position.pieces_of(side.opposite(), PieceKind::Pawn);

    let sides = [
        (captures_right(side, capturers, target), capture_right_offset(side)),
        (captures_left(side, capturers, target), capture_left_offset(side)),
    ];
    for (destinations, offset) in sides {
        for to in Squares(destinations) {
            let captured = source_of(to, push_offset(side));
            if enemy_pawns & square_bit(captured) != 0 {
                out.push(Move::en_passant(source_of(to, offset), to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;

    fn pawn_moves(fen: &str) -> Vec<Move> {
        let position = Position::from_fen(fen).expect("valid FEN");
        let mut out = Vec::new();
        generate_pawn_moves(&position, &mut out);
        out
    }

    #[test]
    fn start_position_has_sixteen_pawn_moves_in_order() {
        let out = pawn_moves(crate::game_state::chess_rules::STARTING_POSITION_FEN);
        assert_eq!(out.len(), 16);
        assert_eq!(out[0], Move::normal(8, 16));
        assert_eq!(out[7], Move::normal(15, 23));
        assert_eq!(out[8], Move::normal(8, 24));
        assert_eq!(out[15], Move::normal(15, 31));
    }

    #[test]
    fn every_promotion_destination_yields_four_moves() {
        let out = pawn_moves("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            out,
            vec![
                Move::promotion(49, 57, PieceKind::Queen),
                Move::promotion(49, 57, PieceKind::Rook),
                Move::promotion(49, 57, PieceKind::Bishop),
                Move::promotion(49, 57, PieceKind::Knight),
                Move::promotion(49, 56, PieceKind::Queen),
                Move::promotion(49, 56, PieceKind::Rook),
                Move::promotion(49, 56, PieceKind::Bishop),
                Move::promotion(49, 56, PieceKind::Knight),
            ]
        );
    }

    #[test]
    fn dark_promotes_on_first_rank() {
        let out = pawn_moves("4k3/8/8/8/8/8/6p1/4K2R b - - 0 1");
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|mv| mv.promotion_piece().is_some()));
        assert_eq!(out[4], Move::promotion(14, 7, PieceKind::Queen));
    }

    #[test]
    fn en_passant_needs_mark_and_adjacent_pawn() {
        let out = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        assert_eq!(out, vec![Move::normal(36, 44), Move::en_passant(36, 43)]);

        let unmarked = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2");
        assert_eq!(unmarked, vec![Move::normal(36, 44)]);
    }

    #[test]
    fn dark_en_passant_both_sides_right_first() {
        let out = pawn_moves("4k3/8/8/8/2pPp3/8/8/4K3 b - d3 0 1");
        let ep: Vec<Move> = out.into_iter().filter(|mv| mv.is_en_passant()).collect();
        // e4xd3 moves toward the a-file, c4xd3 toward the h-file.
        assert_eq!(ep, vec![Move::en_passant(26, 19), Move::en_passant(28, 19)]);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let out = pawn_moves("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1");
        assert!(out.is_empty());
    }
}
