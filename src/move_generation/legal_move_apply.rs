//! Move application.
//!
//! `apply_move` is the only way a position advances. It clones the state and
//! performs the whole update (capture removal, relocation, en-passant
//! recomputation, castling-right revocation, auto-queen promotion, the
//! castling rook's companion move, and the clocks) before returning, so a
//! caller never observes a half-applied position. Callers are expected to
//! validate against the legal-move set first; the only precondition enforced
//! here is that the start square is occupied.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    kingside_rook_home, promotion_rank, queenside_rook_home,
};
use crate::game_state::chess_types::{
    BoardLocation, CastlingRights, Color, EnPassantState, PieceKind, PieceRecord,
};
use crate::game_state::game_state::GameState;

pub fn apply_move(game_state: &GameState, mv: &ChessMove) -> ChessResult<GameState> {
    let mut next = game_state.clone();

    let moving = next
        .board
        .get(mv.start)?
        .ok_or(ChessError::IllegalMove {
            from: mv.start,
            to: mv.stop,
        })?;

    // The en-passant victim does not stand on the destination square.
    if let MoveKind::EnPassantCapture(captured_at) = mv.kind {
        next.board.set(captured_at, None)?;
    }

    let displaced = next.board.relocate(mv.start, mv.stop)?;

    // One-ply lifetime: only a fresh double push arms the flag.
    next.en_passant = if mv.kind == MoveKind::DoublePawnPush {
        Some(EnPassantState {
            target: (mv.stop.0, (mv.start.1 + mv.stop.1) / 2),
            captured_rank: mv.stop.1,
        })
    } else {
        None
    };

    update_castling_rights(&mut next.castling_rights, moving, mv.start, mv.stop);

    if moving.class == PieceKind::Pawn && mv.stop.1 == promotion_rank(moving.color) {
        next.board.set(
            mv.stop,
            Some(PieceRecord {
                class: PieceKind::Queen,
                color: moving.color,
            }),
        )?;
    }

    match mv.kind {
        MoveKind::CastleKingside => {
            next.board
                .relocate(kingside_rook_home(moving.color), (5, mv.start.1))?;
        }
        MoveKind::CastleQueenside => {
            next.board
                .relocate(queenside_rook_home(moving.color), (3, mv.start.1))?;
        }
        _ => {}
    }

    let was_capture = displaced.is_some() || matches!(mv.kind, MoveKind::EnPassantCapture(_));
    if moving.class == PieceKind::Pawn || was_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving.color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.move_counter = next.move_counter.saturating_add(1);
    next.side_to_move = moving.color.opposite();

    Ok(next)
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    moving: PieceRecord,
    from: BoardLocation,
    to: BoardLocation,
) {
    if moving.class == PieceKind::King {
        rights.revoke_both(moving.color);
    }

    // A rook leaving its home square and a rook captured on its home square
    // both kill the corresponding right. Matching the square alone is sound:
    // while a right is live, only the original rook can stand there.
    for square in [from, to] {
        for color in [Color::Light, Color::Dark] {
            if square == kingside_rook_home(color) {
                rights.revoke_kingside(color);
            }
            if square == queenside_rook_home(color) {
                rights.revoke_queenside(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;

    fn find_move(game: &GameState, start: BoardLocation, stop: BoardLocation) -> ChessMove {
        *legal_moves(game, game.side_to_move)
            .expect("move generation should succeed")
            .iter()
            .find(|m| m.start == start && m.stop == stop)
            .expect("expected move should be legal")
    }

    #[test]
    fn double_push_arms_the_en_passant_flag_for_one_ply() {
        let game = GameState::new_game();
        let after_e4 = apply_move(&game, &find_move(&game, (4, 1), (4, 3)))
            .expect("apply should succeed");

        let ep = after_e4.en_passant.expect("double push should arm the flag");
        assert_eq!(ep.target, (4, 2));
        assert_eq!(ep.captured_pawn_location(), (4, 3));
        assert_eq!(after_e4.side_to_move, Color::Dark);
        assert_eq!(after_e4.move_counter, 1);

        let after_nc6 = apply_move(&after_e4, &find_move(&after_e4, (1, 7), (2, 5)))
            .expect("apply should succeed");
        assert!(after_nc6.en_passant.is_none());
    }

    #[test]
    fn en_passant_capture_removes_the_adjacent_pawn() {
        let game = GameState::from_fen(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .expect("test FEN should parse");
        let next = apply_move(&game, &find_move(&game, (4, 4), (3, 5)))
            .expect("apply should succeed");

        assert_eq!(
            next.board.get((3, 5)).expect("in bounds").expect("pawn landed").class,
            PieceKind::Pawn
        );
        assert_eq!(next.board.get((3, 4)).expect("in bounds"), None);
        assert_eq!(next.board.get((4, 4)).expect("in bounds"), None);
        assert_eq!(next.halfmove_clock, 0);
    }

    #[test]
    fn kingside_castling_relocates_the_rook_atomically() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        let next = apply_move(&game, &find_move(&game, (4, 0), (6, 0)))
            .expect("apply should succeed");

        assert_eq!(
            next.board.get((6, 0)).expect("in bounds").expect("king").class,
            PieceKind::King
        );
        assert_eq!(
            next.board.get((5, 0)).expect("in bounds").expect("rook").class,
            PieceKind::Rook
        );
        assert_eq!(next.board.get((7, 0)).expect("in bounds"), None);
        assert!(!next.castling_rights.kingside(Color::Light));
        assert!(!next.castling_rights.queenside(Color::Light));
        assert!(next.castling_rights.kingside(Color::Dark));
    }

    #[test]
    fn rook_moves_revoke_a_single_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        let next = apply_move(&game, &find_move(&game, (0, 0), (0, 3)))
            .expect("apply should succeed");
        assert!(!next.castling_rights.queenside(Color::Light));
        assert!(next.castling_rights.kingside(Color::Light));
    }

    #[test]
    fn capturing_a_home_square_rook_revokes_the_victims_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        let next = apply_move(&game, &find_move(&game, (7, 0), (7, 7)))
            .expect("apply should succeed");

        // Both the mover's right (rook left h1) and the victim's (rook died
        // on h8) are gone; the queenside pair survives.
        assert!(!next.castling_rights.kingside(Color::Light));
        assert!(!next.castling_rights.kingside(Color::Dark));
        assert!(next.castling_rights.queenside(Color::Light));
        assert!(next.castling_rights.queenside(Color::Dark));
    }

    #[test]
    fn pawns_reaching_the_back_rank_become_queens() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("test FEN should parse");
        let next = apply_move(&game, &find_move(&game, (0, 6), (0, 7)))
            .expect("apply should succeed");
        let promoted = next.board.get((0, 7)).expect("in bounds").expect("occupied");
        assert_eq!(promoted.class, PieceKind::Queen);
        assert_eq!(promoted.color, Color::Light);
    }

    #[test]
    fn applying_from_an_empty_square_is_the_callers_error() {
        let game = GameState::new_game();
        let mut ghost = find_move(&game, (4, 1), (4, 2));
        ghost.start = (4, 4);
        assert!(matches!(
            apply_move(&game, &ghost),
            Err(ChessError::IllegalMove { .. })
        ));
    }
}
