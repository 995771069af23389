//! Knight targets from a shifted relative-offset span.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bitboard_masks::shift_span;

/// Knight targets from c3 (square 18).
pub const KNIGHT_SPAN: Bitboard = 0x0000_000A_1100_110A;
const KNIGHT_SPAN_CENTER: Square = 18;

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    shift_span(KNIGHT_SPAN, KNIGHT_SPAN_CENTER, square)
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_SPAN};

    fn reference_knight_attacks(square: u8) -> u64 {
        let file = (square % 8) as i32;
        let rank = (square / 8) as i32;
        let mut out = 0u64;
        for (df, dr) in [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)] {
            let (f, r) = (file + df, rank + dr);
            if (0..8).contains(&f) && (0..8).contains(&r) {
                out |= 1u64 << (r * 8 + f);
            }
        }
        out
    }

    #[test]
    fn span_is_centered_on_c3() {
        assert_eq!(KNIGHT_SPAN, reference_knight_attacks(18));
    }

    #[test]
    fn shifted_span_matches_offsets_on_every_square() {
        for square in 0..64u8 {
            assert_eq!(knight_attacks(square), reference_knight_attacks(square), "square {square}");
        }
    }

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
    }
}
