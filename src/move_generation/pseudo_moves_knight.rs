//! Knight pseudo-legal move generation.

use crate::chess_move::ChessMove;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{BoardLocation, PieceRecord};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::push_step_moves;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_step_moves(&game_state.board, from, piece, &KNIGHT_OFFSETS, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_knight_has_two_squares() {
        let game = GameState::from_fen("7k/8/8/8/8/8/8/N6K w - - 0 1").expect("FEN should parse");
        let piece = game.board.get((0, 0)).expect("in bounds").expect("knight on a1");
        let mut out = Vec::new();
        generate_knight_moves(&game, (0, 0), piece, &mut out).expect("generation should succeed");

        let mut stops: Vec<_> = out.iter().map(|m| m.stop).collect();
        stops.sort();
        assert_eq!(stops, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn friendly_occupancy_filters_offsets() {
        let game = GameState::new_game();
        let piece = game.board.get((1, 0)).expect("in bounds").expect("knight on b1");
        let mut out = Vec::new();
        generate_knight_moves(&game, (1, 0), piece, &mut out).expect("generation should succeed");

        // d2 holds a friendly pawn; a3 and c3 remain.
        let stops: Vec<_> = out.iter().map(|m| m.stop).collect();
        assert_eq!(stops.len(), 2);
        assert!(stops.contains(&(0, 2)));
        assert!(stops.contains(&(2, 2)));
    }
}
