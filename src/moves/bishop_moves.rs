//! Bishop attacks via the occupancy trick on both diagonals.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bitboard_masks::{line_attacks, ANTI_DIAGONAL_MASKS, DIAGONAL_MASKS};

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let occupancy = occupancy | (1u64 << square);
    line_attacks(occupancy, square, DIAGONAL_MASKS[square as usize])
        | line_attacks(occupancy, square, ANTI_DIAGONAL_MASKS[square as usize])
}
