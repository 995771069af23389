//! Move descriptor.
//!
//! A move is a source and destination square plus at most one special tag:
//! a promotion piece or the en-passant flag. Castling is not tagged; it is a
//! king move of two files and is recognized when applied.

use std::cmp::Ordering;
use std::fmt;

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion(PieceKind),
    EnPassant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Normal move between `(rank, file)` coordinates.
    #[inline]
    pub const fn new(from_rank: u8, from_file: u8, to_rank: u8, to_file: u8) -> Self {
        Self::normal(square_of(from_rank, from_file), square_of(to_rank, to_file))
    }

    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    pub const fn promotion(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Promotion(piece),
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::EnPassant,
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn source_rank(self) -> u8 {
        rank_of(self.from)
    }

    #[inline]
    pub const fn source_file(self) -> u8 {
        file_of(self.from)
    }

    #[inline]
    pub const fn dest_rank(self) -> u8 {
        rank_of(self.to)
    }

    #[inline]
    pub const fn dest_file(self) -> u8 {
        file_of(self.to)
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_normal(self) -> bool {
        matches!(self.kind, MoveKind::Normal)
    }

    /// Rank distance between source and destination.
    #[inline]
    pub const fn rank_distance(self) -> u8 {
        self.source_rank().abs_diff(self.dest_rank())
    }

    /// File distance between source and destination.
    #[inline]
    pub const fn file_distance(self) -> u8 {
        self.source_file().abs_diff(self.dest_file())
    }

    #[inline]
    fn sort_key(self) -> (Square, Square, Option<PieceKind>, bool) {
        (self.from, self.to, self.promotion_piece(), self.is_en_passant())
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            char::from(b'a' + self.source_file()),
            char::from(b'1' + self.source_rank()),
            char::from(b'a' + self.dest_file()),
            char::from(b'1' + self.dest_rank()),
        )?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}
