//! Immutable bitboard position.
//!
//! `Position` is the value threaded through generation, application and
//! search. It is `Copy`, never mutated after construction, and safe to share
//! read-only across search workers.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_PIECES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, MovesByPiece};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::search_config::SearchConfig;
use crate::search::search_types::SearchOutcome;
use crate::search::search_root::run_search;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// `[color][piece_kind]`; the twelve boards are pairwise disjoint.
    pub pieces: [[Bitboard; 6]; 2],
    /// At most one bit: the square skipped by the previous double pawn push.
    pub en_passant: Bitboard,
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Position with no pieces, white to move and no castling rights.
    #[inline]
    pub const fn new_empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            en_passant: 0,
            castling_rights: 0,
            side_to_move: Color::Light,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub const fn new_game() -> Self {
        Self {
            pieces: STARTING_PIECES,
            en_passant: 0,
            castling_rights: CASTLE_ALL,
            side_to_move: Color::Light,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub const fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy(Color::Light) | self.occupancy(Color::Dark)
    }

    /// Piece kind of `color` standing on `square`, if any.
    #[inline]
    pub fn kind_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_bit(square);
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces_of(color, *kind) & mask != 0)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Color::BOTH.into_iter().find_map(|color| {
            self.kind_at(color, square)
                .map(|kind| Piece::new(color, kind))
        })
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(color, PieceKind::King);
        (kings != 0).then(|| kings.trailing_zeros() as Square)
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        (self.en_passant != 0).then(|| self.en_passant.trailing_zeros() as Square)
    }

    #[inline]
    pub const fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Whether the side to move is currently attacked on its king square.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    /// All legal moves for the side to move, in generator order.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self).into_vec()
    }

    /// Legal moves partitioned by piece type.
    pub fn legal_moves_by_piece(&self) -> MovesByPiece {
        generate_legal_moves(self)
    }

    /// Child position after `mv`; `self` is left untouched.
    #[inline]
    pub fn make_move(&self, mv: Move) -> Position {
        legal_move_apply::make_move(self, mv)
    }

    /// Applies a sequence of moves in order.
    pub fn apply_moves(&self, moves: &[Move]) -> Position {
        moves.iter().fold(*self, |pos, mv| pos.make_move(*mv))
    }

    /// Static material score from the side to move's point of view.
    #[inline]
    pub fn evaluate(&self) -> i32 {
        MaterialScorer.score(self)
    }

    /// Best move at `depth` plies with the default search configuration.
    pub fn best_move(&self, depth: u8) -> Option<Move> {
        self.search(&SearchConfig::with_depth(depth)).best_move
    }

    /// Runs the search described by `config` with the material scorer.
    pub fn search(&self, config: &SearchConfig) -> SearchOutcome {
        run_search(self, config, &MaterialScorer)
    }
}
