//! Pure move application.
//!
//! [`apply_to_board`] transforms one piece bitboard; [`make_move`] runs it
//! over all twelve boards and derives the rest of the child position.

use crate::game_state::chess_rules::rook_corners;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{Move, MoveKind};

#[inline]
fn move_bit(board: Bitboard, from: Square, to: Square) -> Bitboard {
    if board & square_bit(from) != 0 {
        (board & !square_bit(from)) | square_bit(to)
    } else {
        board & !square_bit(to)
    }
}

/// Applies `mv` to the bitboard holding `piece`.
///
/// Normal: the board with the source bit moves it, every other board loses
/// the destination bit. Promotion: the promoting color (implied by the
/// destination rank) gains the promotion piece on the destination, every
/// other board clears both squares. En-passant: the captured pawn square
/// (destination file, source rank) is cleared before the normal move.
pub fn apply_to_board(board: Bitboard, mv: Move, piece: Piece) -> Bitboard {
    match mv.kind() {
        MoveKind::Normal => move_bit(board, mv.from(), mv.to()),
        MoveKind::Promotion(promoted) => {
            let promoting_color = if mv.dest_rank() == Color::Light.promotion_rank() {
                Color::Light
            } else {
                Color::Dark
            };
            if piece == Piece::new(promoting_color, promoted) {
                board | square_bit(mv.to())
            } else {
                board & !square_bit(mv.from()) & !square_bit(mv.to())
            }
        }
        MoveKind::EnPassant => {
            let captured = square_of(mv.source_rank(), mv.dest_file());
            move_bit(board & !square_bit(captured), mv.from(), mv.to())
        }
    }
}

/// Rook relocation implied by a castling king move, if `mv` is one.
pub fn castle_rook_move(king_board: Bitboard, mv: Move) -> Option<Move> {
    if !mv.is_normal() || king_board & square_bit(mv.from()) == 0 || mv.file_distance() != 2 {
        return None;
    }
    let rank = mv.source_rank();
    Some(if mv.dest_file() > mv.source_file() {
        Move::new(rank, 7, rank, 5)
    } else {
        Move::new(rank, 0, rank, 3)
    })
}

/// En-passant bitboard after `mv`, given the parent's pawns of both colors.
///
/// Holds the skipped square after a two-square pawn push, zero otherwise.
#[inline]
pub fn next_en_passant(pawns: Bitboard, mv: Move) -> Bitboard {
    let is_double_push = mv.is_normal()
        && mv.rank_distance() == 2
        && mv.file_distance() == 0
        && pawns & square_bit(mv.from()) != 0;
    if is_double_push {
        square_bit((mv.from() + mv.to()) / 2)
    } else {
        0
    }
}

fn updated_castling_rights(
    rights: CastlingRights,
    mover: Color,
    moved: Option<PieceKind>,
    mv: Move,
) -> CastlingRights {
    let mut rights = rights;
    if moved == Some(PieceKind::King) {
        rights &= !(kingside_right(mover) | queenside_right(mover));
    }
    // A rook leaving its corner, or anything landing there, ends that right.
    for color in Color::BOTH {
        let (kingside, queenside) = rook_corners(color);
        if mv.from() == kingside || mv.to() == kingside {
            rights &= !kingside_right(color);
        }
        if mv.from() == queenside || mv.to() == queenside {
            rights &= !queenside_right(color);
        }
    }
    rights
}

/// Child position after `mv`. The parent is never modified.
pub fn make_move(position: &Position, mv: Move) -> Position {
    let mover = position.side_to_move;
    let moved = position.kind_at(mover, mv.from());
    let is_capture =
        mv.is_en_passant() || position.occupancy(mover.opposite()) & square_bit(mv.to()) != 0;

    let mut next = *position;
    for color in Color::BOTH {
        for kind in PieceKind::ALL {
            let board = &mut next.pieces[color.index()][kind.index()];
            *board = apply_to_board(*board, mv, Piece::new(color, kind));
        }
    }

    if let Some(rook_move) = castle_rook_move(position.pieces_of(mover, PieceKind::King), mv) {
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let board = &mut next.pieces[color.index()][kind.index()];
                *board = apply_to_board(*board, rook_move, Piece::new(color, kind));
            }
        }
    }

    let pawns = position.pieces_of(Color::Light, PieceKind::Pawn)
        | position.pieces_of(Color::Dark, PieceKind::Pawn);
    next.en_passant = next_en_passant(pawns, mv);
    next.castling_rights = updated_castling_rights(position.castling_rights, mover, moved, mv);

    next.halfmove_clock = if moved == Some(PieceKind::Pawn) || is_capture {
        0
    } else {
        position.halfmove_clock.saturating_add(1)
    };
    if mover == Color::Dark {
        next.fullmove_number = position.fullmove_number.saturating_add(1);
    }
    next.side_to_move = mover.opposite();

    next
}
