//! Set-wise pawn shifts.
//!
//! Every function works on a whole pawn bitboard at once and returns the
//! destination set. The matching `*_OFFSET` constant recovers each source
//! square from its destination.

use crate::game_state::chess_types::{Bitboard, Color, Square};
use crate::moves::bitboard_masks::{FILE_A, FILE_H, RANK_1, RANK_4, RANK_5, RANK_8};

/// Signed square delta from source to destination for one pawn step.
pub type PawnOffset = i8;

#[inline]
pub const fn push_offset(color: Color) -> PawnOffset {
    match color {
        Color::Light => 8,
        Color::Dark => -8,
    }
}

#[inline]
pub const fn double_push_offset(color: Color) -> PawnOffset {
    match color {
        Color::Light => 16,
        Color::Dark => -16,
    }
}

/// Capture toward the h-file.
#[inline]
pub const fn capture_right_offset(color: Color) -> PawnOffset {
    match color {
        Color::Light => 9,
        Color::Dark => -7,
    }
}

/// Capture toward the a-file.
#[inline]
pub const fn capture_left_offset(color: Color) -> PawnOffset {
    match color {
        Color::Light => 7,
        Color::Dark => -9,
    }
}

/// Inverse of a pawn step: the source square of `to`.
#[inline]
pub const fn source_of(to: Square, offset: PawnOffset) -> Square {
    (to as i16 - offset as i16) as Square
}

#[inline]
const fn promotion_rank_mask(color: Color) -> Bitboard {
    match color {
        Color::Light => RANK_8,
        Color::Dark => RANK_1,
    }
}

/// Single pushes onto empty squares, including pushes onto the final rank.
#[inline]
pub const fn single_pushes(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 8) & empty,
        Color::Dark => (pawns >> 8) & empty,
    }
}

/// Two-square pushes: both the skipped and the landing square must be empty.
#[inline]
pub const fn double_pushes(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 16) & empty & (empty << 8) & RANK_4,
        Color::Dark => (pawns >> 16) & empty & (empty >> 8) & RANK_5,
    }
}

#[inline]
pub const fn captures_right(color: Color, pawns: Bitboard, targets: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 9) & targets & !FILE_A,
        Color::Dark => (pawns >> 7) & targets & !FILE_A,
    }
}

#[inline]
pub const fn captures_left(color: Color, pawns: Bitboard, targets: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 7) & targets & !FILE_H,
        Color::Dark => (pawns >> 9) & targets & !FILE_H,
    }
}

/// Splits a destination set into (non-promoting, promoting) parts.
#[inline]
pub const fn split_promotions(color: Color, destinations: Bitboard) -> (Bitboard, Bitboard) {
    let final_rank = promotion_rank_mask(color);
    (destinations & !final_rank, destinations & final_rank)
}

/// Every square attacked diagonally by `pawns`, regardless of occupancy.
#[inline]
pub const fn pawn_attack_set(color: Color, pawns: Bitboard) -> Bitboard {
    captures_right(color, pawns, !0) | captures_left(color, pawns, !0)
}

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    pawn_attack_set(color, 1u64 << square)
}
