//! Crate-wide error type.
//!
//! Only the text boundary (FEN, move strings, UCI options) and worker-pool
//! construction can fail. Move generation, move application, evaluation and
//! search are infallible for any structurally valid `Position`.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Errors raised while turning external text or configuration into engine state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A required FEN field is absent.
    #[error("FEN is missing the {0} field")]
    FenMissingField(&'static str),

    /// The FEN carries more than six whitespace-separated fields.
    #[error("FEN has extra trailing fields")]
    FenExtraFields,

    /// The piece-placement field is malformed.
    #[error("invalid FEN board layout: {0}")]
    FenInvalidBoard(String),

    /// A side must have exactly one king.
    #[error("FEN must place exactly one {color:?} king, found {count}")]
    FenKingCount { color: Color, count: u32 },

    #[error("invalid FEN side-to-move field: {0}")]
    FenInvalidSideToMove(String),

    #[error("invalid FEN castling character: {0}")]
    FenInvalidCastling(char),

    #[error("invalid FEN en-passant square: {0}")]
    FenInvalidEnPassant(String),

    #[error("invalid FEN move counter: {0}")]
    FenInvalidCounter(String),

    /// A coordinate such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// Move text is not shaped like long algebraic notation.
    #[error("invalid long algebraic move: {0}")]
    InvalidMoveText(String),

    /// Move text parsed, but no legal move in the position matches it.
    #[error("move {0} is not legal in the current position")]
    IllegalMove(String),

    /// `position` was followed by something other than `startpos` or `fen`.
    #[error("unknown position kind: {0}")]
    UnknownPositionKind(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// The rayon worker pool could not be built.
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for ChessError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        ChessError::ThreadPool(err.to_string())
    }
}

pub type ChessResult<T> = Result<T, ChessError>;
