//! Queen pseudo-legal move generation.

use crate::chess_move::ChessMove;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{BoardLocation, PieceRecord};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::{push_slide_moves, ALL_DIRECTIONS};

pub fn generate_queen_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_slide_moves(&game_state.board, from, piece, &ALL_DIRECTIONS, out)
}
