//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, simulates each candidate
//! to discard self-check outcomes, and layers the path-attack conditions onto
//! castling candidates. The castling checks live here rather than in the
//! king's generator so that attack detection can keep calling the pseudo
//! layer without recursion.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{BoardLocation, Color};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::{is_square_attacked, would_leave_own_king_in_check};
use crate::move_generation::pseudo_move_generator::{all_pseudo_moves, pseudo_moves_from};

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>>;
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>> {
        legal_moves(game_state, game_state.side_to_move)
    }
}

/// Every legal move a side has: pseudo-legal candidates minus those that
/// leave the mover's own king attacked, with castling additionally requiring
/// an unattacked start, transit, and destination square for the king.
pub fn legal_moves(game_state: &GameState, color: Color) -> ChessResult<Vec<ChessMove>> {
    filter_legal(game_state, all_pseudo_moves(game_state, color)?)
}

/// Legal moves for the piece standing on `from` alone.
pub fn legal_moves_from(
    game_state: &GameState,
    from: BoardLocation,
) -> ChessResult<Vec<ChessMove>> {
    filter_legal(game_state, pseudo_moves_from(game_state, from)?)
}

fn filter_legal(
    game_state: &GameState,
    pseudo: Vec<ChessMove>,
) -> ChessResult<Vec<ChessMove>> {
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        if matches!(mv.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
            && !castling_path_is_safe(game_state, &mv)?
        {
            continue;
        }
        if would_leave_own_king_in_check(game_state, &mv)? {
            continue;
        }
        legal.push(mv);
    }

    Ok(legal)
}

fn castling_path_is_safe(game_state: &GameState, mv: &ChessMove) -> ChessResult<bool> {
    let enemy = mv.piece.color.opposite();
    let transit = ((mv.start.0 + mv.stop.0) / 2, mv.start.1);

    for square in [mv.start, transit, mv.stop] {
        if is_square_attacked(game_state, square, enemy)? {
            return Ok(false);
        }
    }
    Ok(true)
}
