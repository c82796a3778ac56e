//! King pseudo-legal move generation.
//!
//! Single steps in all eight directions plus the castling two-step. Castling
//! is offered here on rights, home-square occupancy, and an empty corridor
//! only; whether the king's path is attacked is checked by the legal layer,
//! which keeps attack detection free to call this generator without
//! recursing.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::ChessResult;
use crate::game_state::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::{BoardLocation, PieceKind, PieceRecord};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::{push_step_moves, ALL_DIRECTIONS};

pub fn generate_king_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_step_moves(&game_state.board, from, piece, &ALL_DIRECTIONS, out)?;
    generate_castling_moves(game_state, from, piece, out)
}

fn generate_castling_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    // Rights imply the king never moved, but FEN input can disagree.
    if from != king_home(piece.color) {
        return Ok(());
    }
    let rank = from.1;

    if game_state.castling_rights.kingside(piece.color)
        && corridor_is_empty(game_state, &[(5, rank), (6, rank)])?
        && rook_on(game_state, kingside_rook_home(piece.color), piece)?
    {
        out.push(ChessMove {
            start: from,
            stop: (6, rank),
            piece,
            captured: None,
            kind: MoveKind::CastleKingside,
        });
    }

    if game_state.castling_rights.queenside(piece.color)
        && corridor_is_empty(game_state, &[(1, rank), (2, rank), (3, rank)])?
        && rook_on(game_state, queenside_rook_home(piece.color), piece)?
    {
        out.push(ChessMove {
            start: from,
            stop: (2, rank),
            piece,
            captured: None,
            kind: MoveKind::CastleQueenside,
        });
    }

    Ok(())
}

fn corridor_is_empty(game_state: &GameState, squares: &[BoardLocation]) -> ChessResult<bool> {
    for loc in squares {
        if game_state.board.get(*loc)?.is_some() {
            return Ok(false);
        }
    }
    Ok(true)
}

fn rook_on(game_state: &GameState, loc: BoardLocation, piece: PieceRecord) -> ChessResult<bool> {
    Ok(game_state.board.get(loc)?
        == Some(PieceRecord {
            class: PieceKind::Rook,
            color: piece.color,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king_moves(fen: &str, from: BoardLocation) -> Vec<ChessMove> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let piece = game
            .board
            .get(from)
            .expect("in bounds")
            .expect("king expected on the queried square");
        let mut out = Vec::new();
        generate_king_moves(&game, from, piece, &mut out).expect("generation should succeed");
        out
    }

    #[test]
    fn open_back_rank_offers_both_castles() {
        let out = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", (4, 0));
        assert!(out.iter().any(|m| m.kind == MoveKind::CastleKingside && m.stop == (6, 0)));
        assert!(out.iter().any(|m| m.kind == MoveKind::CastleQueenside && m.stop == (2, 0)));
    }

    #[test]
    fn castling_needs_rights_and_an_empty_corridor() {
        // Rights stripped.
        let out = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", (4, 0));
        assert!(out.iter().all(|m| m.kind == MoveKind::Regular));

        // Corridor blocked at b1 blocks queenside only.
        let out = king_moves("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", (4, 0));
        assert!(out.iter().any(|m| m.kind == MoveKind::CastleKingside));
        assert!(out.iter().all(|m| m.kind != MoveKind::CastleQueenside));
    }

    #[test]
    fn castling_needs_the_rook_at_home() {
        // Rights claim kingside but the h1 rook is gone.
        let out = king_moves("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1", (4, 0));
        assert!(out.iter().all(|m| m.kind != MoveKind::CastleKingside));
        assert!(out.iter().any(|m| m.kind == MoveKind::CastleQueenside));
    }

    #[test]
    fn pseudo_castling_ignores_attacks_on_the_path() {
        // Dark rook aims through f1; the pseudo layer still offers the move,
        // the legal layer is the one that rejects it.
        let out = king_moves("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", (4, 0));
        assert!(out.iter().any(|m| m.kind == MoveKind::CastleKingside));
    }
}
