//! Crate root module declarations for the BitFork chess engine.
//!
//! Exposes the board model, move generation, search, engine and UCI
//! subsystems so the binary, benches and tests share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod bitboard_masks;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod minimax;
    pub mod parallel_alpha_beta;
    pub mod parallel_minimax;
    pub mod search_config;
    pub mod search_root;
    pub mod search_types;
}

pub mod engines {
    pub mod engine_fixed_depth;
    pub mod engine_trait;
}

pub mod uci {
    pub mod uci_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_opening;
    pub mod render_game_state;
}
