//! King targets from a shifted relative-offset span.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bitboard_masks::shift_span;

/// King targets from b2 (square 9).
pub const KING_SPAN: Bitboard = 0x0000_0000_0007_0507;
const KING_SPAN_CENTER: Square = 9;

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    shift_span(KING_SPAN, KING_SPAN_CENTER, square)
}
