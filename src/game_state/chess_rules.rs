//! Canonical chess-rule constants.
//!
//! Starting-position literals plus the fixed king/rook squares that castling
//! legality and castling-rights bookkeeping depend on.

use crate::game_state::chess_types::{Bitboard, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting bitboards indexed `[color][piece_kind]`.
pub const STARTING_PIECES: [[Bitboard; 6]; 2] = [
    [
        0x0000_0000_0000_FF00,
        0x0000_0000_0000_0042,
        0x0000_0000_0000_0024,
        0x0000_0000_0000_0081,
        0x0000_0000_0000_0008,
        0x0000_0000_0000_0010,
    ],
    [
        0x00FF_0000_0000_0000,
        0x4200_0000_0000_0000,
        0x2400_0000_0000_0000,
        0x8100_0000_0000_0000,
        0x0800_0000_0000_0000,
        0x1000_0000_0000_0000,
    ],
];

pub const LIGHT_KING_START: Square = 4;
pub const DARK_KING_START: Square = 60;

/// Corner squares whose rooks carry castling rights: (kingside, queenside).
pub const LIGHT_ROOK_CORNERS: (Square, Square) = (7, 0);
pub const DARK_ROOK_CORNERS: (Square, Square) = (63, 56);

#[inline]
pub const fn king_start(color: Color) -> Square {
    match color {
        Color::Light => LIGHT_KING_START,
        Color::Dark => DARK_KING_START,
    }
}

#[inline]
pub const fn rook_corners(color: Color) -> (Square, Square) {
    match color {
        Color::Light => LIGHT_ROOK_CORNERS,
        Color::Dark => DARK_ROOK_CORNERS,
    }
}
