//! Piece-wise pseudo-legal generation entry points.
//!
//! Pseudo-legal moves obey movement geometry and occupancy but may leave the
//! mover's own king in check; the legal layer filters them.

use crate::chess_move::ChessMove;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind, PieceRecord};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

pub(crate) fn generate_for_piece(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    match piece.class {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Pseudo-legal moves for whatever stands on `from`; empty for an empty
/// square, `OutOfBounds` off the board.
pub fn pseudo_moves_from(
    game_state: &GameState,
    from: BoardLocation,
) -> ChessResult<Vec<ChessMove>> {
    let mut out = Vec::new();
    if let Some(piece) = game_state.board.get(from)? {
        generate_for_piece(game_state, from, piece, &mut out)?;
    }
    Ok(out)
}

/// Pseudo-legal moves for every piece a side owns.
pub fn all_pseudo_moves(game_state: &GameState, color: Color) -> ChessResult<Vec<ChessMove>> {
    let mut out = Vec::with_capacity(64);
    for from in game_state.board.locations_of(color) {
        if let Some(piece) = game_state.board.get(from)? {
            generate_for_piece(game_state, from, piece, &mut out)?;
        }
    }
    Ok(out)
}
