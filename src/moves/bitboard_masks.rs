//! Static line masks and the occupancy-trick line attack.
//!
//! Every sliding attack in the engine goes through [`line_attacks`], which
//! resolves blockers in both directions of one line with a subtraction on the
//! occupancy and a second subtraction on its bit-reversal.

use crate::game_state::chess_types::{file_of, rank_of, Bitboard, Square};

pub const FILE_A: Bitboard = 0x0101_0101_0101_0101;
pub const FILE_H: Bitboard = 0x8080_8080_8080_8080;
pub const FILE_AB: Bitboard = 0x0303_0303_0303_0303;
pub const FILE_GH: Bitboard = 0xC0C0_C0C0_C0C0_C0C0;

pub const RANK_1: Bitboard = 0x0000_0000_0000_00FF;
pub const RANK_3: Bitboard = 0x0000_0000_00FF_0000;
pub const RANK_4: Bitboard = 0x0000_0000_FF00_0000;
pub const RANK_5: Bitboard = 0x0000_00FF_0000_0000;
pub const RANK_6: Bitboard = 0x0000_FF00_0000_0000;
pub const RANK_8: Bitboard = 0xFF00_0000_0000_0000;

pub const FILE_MASKS: [Bitboard; 8] = generate_file_masks();
pub const RANK_MASKS: [Bitboard; 8] = generate_rank_masks();

/// a1-h8 direction diagonal through each square.
pub const DIAGONAL_MASKS: [Bitboard; 64] = generate_diagonal_masks();
/// h1-a8 direction anti-diagonal through each square.
pub const ANTI_DIAGONAL_MASKS: [Bitboard; 64] = generate_anti_diagonal_masks();

/// Sliding attacks along one line.
///
/// `line` must contain `square`, and its squares must increase monotonically
/// in index along the line (true for ranks, files and both diagonals).
/// `occupancy` is the full board occupancy including the slider itself.
#[inline]
pub fn line_attacks(occupancy: Bitboard, square: Square, line: Bitboard) -> Bitboard {
    let slider = 1u64 << square;
    let on_line = occupancy & line;
    let forward = on_line.wrapping_sub(slider.wrapping_mul(2));
    let backward = on_line
        .reverse_bits()
        .wrapping_sub(slider.reverse_bits().wrapping_mul(2))
        .reverse_bits();
    (forward ^ backward) & line
}

#[inline]
pub const fn file_mask(square: Square) -> Bitboard {
    FILE_MASKS[file_of(square) as usize]
}

#[inline]
pub const fn rank_mask(square: Square) -> Bitboard {
    RANK_MASKS[rank_of(square) as usize]
}

/// Shifts a span centered on `center` so it is centered on `square`, then
/// removes the columns that wrapped around the board edge.
#[inline]
pub const fn shift_span(span: Bitboard, center: Square, square: Square) -> Bitboard {
    let shifted = if square > center {
        span << (square - center)
    } else {
        span >> (center - square)
    };
    if file_of(square) < 4 {
        shifted & !FILE_GH
    } else {
        shifted & !FILE_AB
    }
}

const fn generate_file_masks() -> [Bitboard; 8] {
    let mut table = [0u64; 8];
    let mut file = 0usize;
    while file < 8 {
        table[file] = FILE_A << file;
        file += 1;
    }
    table
}

const fn generate_rank_masks() -> [Bitboard; 8] {
    let mut table = [0u64; 8];
    let mut rank = 0usize;
    while rank < 8 {
        table[rank] = RANK_1 << (rank * 8);
        rank += 1;
    }
    table
}

const fn generate_diagonal_masks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let diff = (sq % 8) as i32 - (sq / 8) as i32;
        let mut mask = 0u64;
        let mut other = 0usize;
        while other < 64 {
            if (other % 8) as i32 - (other / 8) as i32 == diff {
                mask |= 1u64 << other;
            }
            other += 1;
        }
        table[sq] = mask;
        sq += 1;
    }
    table
}

const fn generate_anti_diagonal_masks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let sum = sq % 8 + sq / 8;
        let mut mask = 0u64;
        let mut other = 0usize;
        while other < 64 {
            if other % 8 + other / 8 == sum {
                mask |= 1u64 << other;
            }
            other += 1;
        }
        table[sq] = mask;
        sq += 1;
    }
    table
}
