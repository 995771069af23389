//! UCI long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Text is resolved against the legal move list, so en-passant and castling
//! need no extra markers and every legal move has exactly one spelling.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

/// Shape-level parse: source, destination and optional promotion piece.
pub fn parse_move_text(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let invalid = || ChessError::InvalidMoveText(text.to_owned());
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind) if ch.is_ascii_lowercase() && PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(invalid()),
        },
    };

    Ok((from, to, promotion))
}

/// Finds the legal move spelled by `text` in `position`.
pub fn long_algebraic_to_move(text: &str, position: &Position) -> ChessResult<Move> {
    let (from, to, promotion) = parse_move_text(text)?;
    position
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
}
