//! Attack detection and the simulate-and-undo legality check.
//!
//! `is_square_attacked` deliberately never calls legal-move generation:
//! knights and sliders are tested through their pseudo-legal move sets, while
//! pawns and kings are tested by raw geometry. Pawns attack their capture
//! diagonals even when those squares are empty (a pseudo pawn capture needs
//! an occupied target and would miss attacks on empty castling-path squares),
//! and testing the enemy king by adjacency rejects illegal king-next-to-king
//! positions without recursing into its generator.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::ChessResult;
use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_generator::generate_for_piece;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<BoardLocation> {
    game_state.board.find_king(color)
}

/// Whether any piece of `attacker_color` attacks `target`.
pub fn is_square_attacked(
    game_state: &GameState,
    target: BoardLocation,
    attacker_color: Color,
) -> ChessResult<bool> {
    let mut scratch = Vec::new();

    for from in game_state.board.locations_of(attacker_color) {
        let Some(piece) = game_state.board.get(from)? else {
            continue;
        };

        let reaches = match piece.class {
            PieceKind::Pawn => {
                (target.0 - from.0).abs() == 1 && target.1 - from.1 == pawn_direction(piece.color)
            }
            PieceKind::King => {
                let d_file = (target.0 - from.0).abs();
                let d_rank = (target.1 - from.1).abs();
                d_file <= 1 && d_rank <= 1 && (d_file, d_rank) != (0, 0)
            }
            _ => {
                scratch.clear();
                generate_for_piece(game_state, from, piece, &mut scratch)?;
                scratch.iter().any(|m| m.stop == target)
            }
        };

        if reaches {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Whether `color`'s king is currently attacked; false when no king is on the
/// board (cannot verify, so not in check).
pub fn is_king_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    let Some(king) = king_square(game_state, color) else {
        return Ok(false);
    };
    is_square_attacked(game_state, king, color.opposite())
}

/// Simulate `mv` on an owned scratch copy (the piece relocation plus, for en
/// passant, removal of the separately-located captured pawn; castling-rights
/// and en-passant bookkeeping stay untouched), then ask whether the mover's
/// king is attacked. The caller's state is never mutated on any path.
pub fn would_leave_own_king_in_check(
    game_state: &GameState,
    mv: &ChessMove,
) -> ChessResult<bool> {
    let mut scratch = game_state.clone();

    if let MoveKind::EnPassantCapture(captured_at) = mv.kind {
        scratch.board.set(captured_at, None)?;
    }
    scratch.board.relocate(mv.start, mv.stop)?;

    let Some(king) = scratch.board.find_king(mv.piece.color) else {
        return Ok(false);
    };
    is_square_attacked(&scratch, king, mv.piece.color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::pseudo_move_generator::pseudo_moves_from;

    #[test]
    fn sliders_attack_through_open_lines_only() {
        let game = GameState::from_fen("4k3/8/8/8/3r4/8/3P4/3K4 w - - 0 1")
            .expect("test FEN should parse");
        // Rook d4 is blocked by the d2 pawn before reaching d1.
        assert!(is_square_attacked(&game, (3, 1), Color::Dark).expect("query should succeed"));
        assert!(!is_square_attacked(&game, (3, 0), Color::Dark).expect("query should succeed"));
    }

    #[test]
    fn pawns_attack_empty_diagonals() {
        let game = GameState::from_fen("4k3/8/8/8/8/4p3/8/4K3 w - - 0 1")
            .expect("test FEN should parse");
        // d2 and f2 are empty, yet the e3 pawn covers both.
        assert!(is_square_attacked(&game, (3, 1), Color::Dark).expect("query should succeed"));
        assert!(is_square_attacked(&game, (5, 1), Color::Dark).expect("query should succeed"));
        assert!(!is_square_attacked(&game, (4, 1), Color::Dark).expect("query should succeed"));
    }

    #[test]
    fn kings_attack_by_adjacency() {
        let game = GameState::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1")
            .expect("test FEN should parse");
        assert!(is_square_attacked(&game, (3, 3), Color::Dark).expect("query should succeed"));
        assert!(!is_square_attacked(&game, (3, 2), Color::Dark).expect("query should succeed"));
    }

    #[test]
    fn check_detection_degrades_without_a_king() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("test FEN should parse");
        assert!(!is_king_in_check(&game, Color::Light).expect("query should succeed"));
    }

    #[test]
    fn pinned_piece_moves_are_flagged() {
        let game = GameState::from_fen("4k3/8/8/8/8/4r3/4N3/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let knight_moves = pseudo_moves_from(&game, (4, 1)).expect("generation should succeed");
        assert!(!knight_moves.is_empty());
        for mv in &knight_moves {
            assert!(
                would_leave_own_king_in_check(&game, mv).expect("query should succeed"),
                "every knight move abandons the pin"
            );
        }
    }

    #[test]
    fn simulation_leaves_the_caller_state_untouched() {
        let game = GameState::from_fen(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .expect("test FEN should parse");
        let before = game.get_fen();

        for mv in crate::move_generation::pseudo_move_generator::all_pseudo_moves(
            &game,
            Color::Light,
        )
        .expect("generation should succeed")
        {
            let _ = would_leave_own_king_in_check(&game, &mv).expect("query should succeed");
            assert_eq!(game.get_fen(), before);
        }
    }
}
