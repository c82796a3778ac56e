//! Terminal-state evaluation.
//!
//! Polled by the turn-management collaborator after each move: a side with no
//! legal moves is checkmated if its king is attacked and stalemated
//! otherwise.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

pub fn evaluate_outcome(game_state: &GameState) -> ChessResult<GameOutcome> {
    let mover = game_state.side_to_move;
    if !legal_moves(game_state, mover)?.is_empty() {
        return Ok(GameOutcome::InProgress);
    }

    if is_king_in_check(game_state, mover)? {
        Ok(GameOutcome::Checkmate {
            winner: mover.opposite(),
        })
    } else {
        Ok(GameOutcome::Stalemate)
    }
}
