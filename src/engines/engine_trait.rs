//! Engine abstraction layer.
//!
//! Defines the seam behind which move-selection strategies sit, so the
//! turn-management collaborator can swap strategies without caring what is
//! behind the trait.

use crate::chess_move::ChessMove;
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, `None` when no legal move exists.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<ChessMove>>;
}
