//! Full legal move generation pipeline.
//!
//! Runs the per-piece pseudo-legal emitters in fixed order, then applies each
//! candidate and drops the ones that leave the mover's own king attacked.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, unsafe_squares};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Legal moves grouped by the kind of piece that moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovesByPiece {
    pub pawn: Vec<Move>,
    pub knight: Vec<Move>,
    pub bishop: Vec<Move>,
    pub rook: Vec<Move>,
    pub queen: Vec<Move>,
    pub king: Vec<Move>,
    pub castle: Vec<Move>,
}

impl MovesByPiece {
    fn groups(&self) -> [&Vec<Move>; 7] {
        [
            &self.pawn,
            &self.knight,
            &self.bishop,
            &self.rook,
            &self.queen,
            &self.king,
            &self.castle,
        ]
    }

    fn groups_mut(&mut self) -> [&mut Vec<Move>; 7] {
        [
            &mut self.pawn,
            &mut self.knight,
            &mut self.bishop,
            &mut self.rook,
            &mut self.queen,
            &mut self.king,
            &mut self.castle,
        ]
    }

    /// Moves in generator order: pawn, knight, bishop, rook, queen, king, castle.
    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.groups().into_iter().flatten()
    }

    pub fn into_vec(self) -> Vec<Move> {
        let mut all = Vec::with_capacity(self.len());
        for group in [
            self.pawn,
            self.knight,
            self.bishop,
            self.rook,
            self.queen,
            self.king,
            self.castle,
        ] {
            all.extend(group);
        }
        all
    }

    pub fn len(&self) -> usize {
        self.groups().iter().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-piece emission without the self-check filter.
pub fn generate_pseudo_legal_moves(position: &Position) -> MovesByPiece {
    let unsafe_sq = unsafe_squares(position, position.side_to_move);
    let mut moves = MovesByPiece::default();

    generate_pawn_moves(position, &mut moves.pawn);
    generate_knight_moves(position, &mut moves.knight);
    generate_bishop_moves(position, &mut moves.bishop);
    generate_rook_moves(position, &mut moves.rook);
    generate_queen_moves(position, &mut moves.queen);
    generate_king_moves(position, unsafe_sq, &mut moves.king);
    generate_castling_moves(position, unsafe_sq, &mut moves.castle);

    moves
}

pub fn generate_legal_moves(position: &Position) -> MovesByPiece {
    let side = position.side_to_move;
    let mut moves = generate_pseudo_legal_moves(position);
    for group in moves.groups_mut() {
        // Illegal if own king is in check after move.
        group.retain(|mv| !is_king_in_check(&make_move(position, *mv), side));
    }
    moves
}
