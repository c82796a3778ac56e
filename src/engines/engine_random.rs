//! Uniform random-move engine.
//!
//! Selects uniformly from the legal moves and is primarily used for
//! diagnostics, integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::chess_move::ChessMove;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{LegalMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<ChessMove>> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;

        let mut rng = rand::rng();
        Ok(legal_moves.as_slice().choose(&mut rng).copied())
    }
}
