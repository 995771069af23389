//! Square conversions for algebraic coordinates such as `e4`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{square_of, Bitboard, Square};

/// Parses a coordinate such as `e4` into a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let [file, rank] = square.as_bytes() else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };
    if !(b'a'..=b'h').contains(file) || !(b'1'..=b'8').contains(rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }
    Ok(square_of(rank - b'1', file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'1' + square / 8);
    format!("{file}{rank}")
}

/// Names the single set square of a one-hot bitboard.
pub fn bitboard_to_algebraic(bitboard: Bitboard) -> Option<String> {
    (bitboard.count_ones() == 1).then(|| square_to_algebraic(bitboard.trailing_zeros() as Square))
}
