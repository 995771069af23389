//! Rook attacks via the occupancy trick on the rank and file lines.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bitboard_masks::{file_mask, line_attacks, rank_mask};

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let occupancy = occupancy | (1u64 << square);
    line_attacks(occupancy, square, rank_mask(square)) | line_attacks(occupancy, square, file_mask(square))
}

/// Rook rays on an empty board.
#[inline]
pub fn rook_rays(square: Square) -> Bitboard {
    rook_attacks(square, 0)
}
