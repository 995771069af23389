//! Engine abstraction layer used by the UCI subsystem.
//!
//! The protocol loop only talks to `dyn Engine`, so search strategies can be
//! swapped without touching command handling.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the configured depth for this search only.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn author(&self) -> &str;

    /// `option name ...` declarations printed in reply to `uci`.
    fn uci_options(&self) -> Vec<String> {
        Vec::new()
    }

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()>;

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> ChessResult<EngineOutput>;
}
