//! Attack maps and king safety.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::Squares;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attack_set, pawn_attacks};
use crate::moves::rook_moves::rook_attacks;

/// Union of every square attacked by `attacker` given `occupancy`.
pub fn attacked_squares(position: &Position, attacker: Color, occupancy: Bitboard) -> Bitboard {
    let mut attacked = pawn_attack_set(attacker, position.pieces_of(attacker, PieceKind::Pawn));

    for from in Squares(position.pieces_of(attacker, PieceKind::Knight)) {
        attacked |= knight_attacks(from);
    }
    for from in Squares(position.pieces_of(attacker, PieceKind::King)) {
        attacked |= king_attacks(from);
    }

    let queens = position.pieces_of(attacker, PieceKind::Queen);
    for from in Squares(position.pieces_of(attacker, PieceKind::Bishop) | queens) {
        attacked |= bishop_attacks(from, occupancy);
    }
    for from in Squares(position.pieces_of(attacker, PieceKind::Rook) | queens) {
        attacked |= rook_attacks(from, occupancy);
    }

    attacked
}

/// Squares the king of `color` may not stand on.
///
/// Sliders see through the king itself, so stepping back along a checking
/// ray is also unsafe.
#[inline]
pub fn unsafe_squares(position: &Position, color: Color) -> Bitboard {
    let occupancy = position.occupied() & !position.pieces_of(color, PieceKind::King);
    attacked_squares(position, color.opposite(), occupancy)
}

pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    let occupancy = position.occupied();
    let pieces = |kind| position.pieces_of(attacker, kind);

    // A pawn of `attacker` hits `square` iff a defender pawn on `square` would hit it back.
    if pawn_attacks(attacker.opposite(), square) & pieces(PieceKind::Pawn) != 0 {
        return true;
    }
    if knight_attacks(square) & pieces(PieceKind::Knight) != 0 {
        return true;
    }
    if king_attacks(square) & pieces(PieceKind::King) != 0 {
        return true;
    }

    let queens = pieces(PieceKind::Queen);
    if bishop_attacks(square, occupancy) & (pieces(PieceKind::Bishop) | queens) != 0 {
        return true;
    }
    rook_attacks(square, occupancy) & (pieces(PieceKind::Rook) | queens) != 0
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = position.king_square(color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_quiet() {
        let position = Position::new_game();
        assert!(!is_king_in_check(&position, Color::Light));
        assert!(!is_king_in_check(&position, Color::Dark));
        // Dark attacks cover ranks 6 and 7 entirely plus knight hops.
        let attacked = attacked_squares(&position, Color::Dark, position.occupied());
        assert_eq!(attacked & 0x0000_FF00_0000_0000, 0x0000_FF00_0000_0000);
        assert_eq!(attacked & 0xFFFF_FFFF, 0);
    }

    #[test]
    fn rook_check_covers_retreat_square() {
        // Black rook e8 checks the e2 king; e1 stays on the ray.
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4K3/8 w - - 0 1").expect("valid FEN");
        assert!(is_king_in_check(&position, Color::Light));
        let unsafe_sq = unsafe_squares(&position, Color::Light);
        assert_ne!(unsafe_sq & (1u64 << 4), 0);
        assert_eq!(unsafe_sq & (1u64 << 3), 0);
    }

    #[test]
    fn pawn_attack_direction() {
        let position = Position::from_fen("4k3/8/8/8/3p4/8/8/4K3 w - - 0 1").expect("valid FEN");
        assert!(is_square_attacked(&position, 18, Color::Dark));
        assert!(is_square_attacked(&position, 20, Color::Dark));
        assert!(!is_square_attacked(&position, 34, Color::Dark));
    }

    #[test]
    fn attacked_squares_agrees_with_point_queries() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("valid FEN");
        for attacker in Color::BOTH {
            let map = attacked_squares(&position, attacker, position.occupied());
            for square in 0..64u8 {
                assert_eq!(
                    map & (1u64 << square) != 0,
                    is_square_attacked(&position, square, attacker),
                    "{attacker:?} on {square}"
                );
            }
        }
    }
}
