//! Rook pseudo-legal move generation.

use crate::chess_move::ChessMove;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{BoardLocation, PieceRecord};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::{push_slide_moves, ROOK_DIRECTIONS};

pub fn generate_rook_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_slide_moves(&game_state.board, from, piece, &ROOK_DIRECTIONS, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rays_stop_at_blockers_and_include_captures() {
        // Light rook d4, friendly pawn d6, enemy knight g4.
        let game = GameState::from_fen("7k/8/3P4/8/3R2n1/8/8/7K w - - 0 1")
            .expect("FEN should parse");
        let piece = game.board.get((3, 3)).expect("in bounds").expect("rook on d4");
        let mut out = Vec::new();
        generate_rook_moves(&game, (3, 3), piece, &mut out).expect("generation should succeed");

        let stops: Vec<_> = out.iter().map(|m| m.stop).collect();
        assert!(stops.contains(&(3, 4)), "open square toward the pawn");
        assert!(!stops.contains(&(3, 5)), "friendly blocker excluded");
        assert!(stops.contains(&(6, 3)), "enemy blocker included as capture");
        assert!(!stops.contains(&(7, 3)), "ray stops behind the capture");
        assert!(
            out.iter().any(|m| m.stop == (6, 3) && m.captured.is_some()),
            "capture records the displaced piece"
        );
    }
}
