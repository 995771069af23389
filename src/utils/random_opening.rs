//! Seeded random playouts from the starting position.

use rand::Rng;

use crate::game_state::chess_types::Position;

/// Plays up to `plies` uniformly random legal moves from the starting
/// position, stopping early if the side to move has none.
pub fn random_opening<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Position {
    let mut position = Position::new_game();
    for _ in 0..plies {
        let moves = position.legal_moves();
        if moves.is_empty() {
            break;
        }
        position = position.make_move(moves[rng.gen_range(0..moves.len())]);
    }
    position
}
