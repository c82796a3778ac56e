//! Boundary surface consumed by UI and game-loop collaborators.
//!
//! Everything a rendering/turn-management layer needs: position setup, the
//! "can this piece move, and where" affordance queries, validated move
//! application, terminal-state polling, and the save/restore text round
//! trips. The engine itself never initiates anything; collaborators call in
//! and get a value back.

use crate::chess_move::ChessMove;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_PLACEMENT;
use crate::game_state::chess_types::{BoardLocation, Color};
use crate::game_state::game_state::{inferred_castling_rights, GameState};
use crate::move_generation::game_outcome::{evaluate_outcome, GameOutcome};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_from};
use crate::utils::fen_generator::generate_placement;
use crate::utils::state_string::{generate_state_string, parse_state_string};

/// Build a fresh game, from the standard opening placement or a supplied FEN
/// placement field.
pub fn setup(placement: Option<&str>) -> ChessResult<GameState> {
    GameState::from_placement(placement.unwrap_or(STARTING_PLACEMENT))
}

/// True only when the occupant of `loc` belongs to the side to move.
pub fn can_move_from(game_state: &GameState, loc: BoardLocation) -> ChessResult<bool> {
    Ok(game_state
        .board
        .get(loc)?
        .is_some_and(|piece| piece.color == game_state.side_to_move))
}

/// Squares the piece on `from` can legally reach.
pub fn legal_destinations(
    game_state: &GameState,
    from: BoardLocation,
) -> ChessResult<Vec<BoardLocation>> {
    Ok(legal_moves_from(game_state, from)?
        .iter()
        .map(|m| m.stop)
        .collect())
}

/// Validate a from/to pair against the legal-move set and apply it. Promotion
/// needs no disambiguation: the engine promotes to a queen unconditionally.
pub fn apply_user_move(
    game_state: &GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> ChessResult<GameState> {
    if !can_move_from(game_state, from)? {
        return Err(ChessError::IllegalMove { from, to });
    }

    let candidates = legal_moves_from(game_state, from)?;
    let mv = candidates
        .iter()
        .find(|m| m.stop == to)
        .ok_or(ChessError::IllegalMove { from, to })?;

    apply_move(game_state, mv)
}

pub fn outcome(game_state: &GameState) -> ChessResult<GameOutcome> {
    evaluate_outcome(game_state)
}

/// The full valid-move list for the current player.
pub fn legal_moves_for_side_to_move(game_state: &GameState) -> ChessResult<Vec<ChessMove>> {
    legal_moves(game_state, game_state.side_to_move)
}

pub fn to_state_string(game_state: &GameState) -> String {
    generate_state_string(&game_state.board)
}

/// Restore a position from the 64-cell encoding. The format carries occupancy
/// only: the restored state gets Light to move, no en-passant history, and
/// castling rights inferred from home-square occupancy.
pub fn from_state_string(text: &str) -> ChessResult<GameState> {
    let board = parse_state_string(text)?;
    let castling_rights = inferred_castling_rights(&board);
    Ok(GameState {
        board,
        side_to_move: Color::Light,
        castling_rights,
        en_passant: None,
        move_counter: 0,
        halfmove_clock: 0,
        fullmove_number: 1,
    })
}

pub fn to_fen_placement(game_state: &GameState) -> String {
    generate_placement(&game_state.board)
}

pub fn from_fen_placement(text: &str) -> ChessResult<GameState> {
    GameState::from_placement(text)
}
