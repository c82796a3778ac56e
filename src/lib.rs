//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! engines, serialization utilities, and the collaborator-facing interface)
//! so binaries, tests, and external tooling can import stable module paths.

pub mod chess_move;
pub mod errors;
pub mod game_interface;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod game_outcome;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_move_generator;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
    pub mod state_string;
}
