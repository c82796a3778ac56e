//! Pawn pseudo-legal move generation.
//!
//! Single push, double push from the home rank, diagonal captures, and the
//! en-passant capture whose destination square is itself empty. Last-rank
//! landings are the same moves tagged `PromoteToQueen`; no under-promotion
//! choice exists in this engine.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::ChessResult;
use crate::game_state::chess_rules::{pawn_direction, pawn_home_rank, promotion_rank};
use crate::game_state::chess_types::{move_board_location, BoardLocation, PieceKind, PieceRecord};
use crate::game_state::game_state::GameState;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    let direction = pawn_direction(piece.color);

    if let Ok(one_step) = move_board_location(from, 0, direction) {
        if game_state.board.get(one_step)?.is_none() {
            out.push(ChessMove {
                start: from,
                stop: one_step,
                piece,
                captured: None,
                kind: advance_kind(one_step, piece),
            });

            if from.1 == pawn_home_rank(piece.color) {
                let two_step = move_board_location(from, 0, 2 * direction)?;
                if game_state.board.get(two_step)?.is_none() {
                    out.push(ChessMove {
                        start: from,
                        stop: two_step,
                        piece,
                        captured: None,
                        kind: MoveKind::DoublePawnPush,
                    });
                }
            }
        }
    }

    for d_file in [-1i8, 1i8] {
        let Ok(stop) = move_board_location(from, d_file, direction) else {
            continue;
        };
        match game_state.board.get(stop)? {
            Some(target) if target.color != piece.color => out.push(ChessMove {
                start: from,
                stop,
                piece,
                captured: Some(target),
                kind: advance_kind(stop, piece),
            }),
            None => {
                if let Some(ep) = game_state.en_passant {
                    if ep.target == stop {
                        out.push(ChessMove {
                            start: from,
                            stop,
                            piece,
                            captured: Some(PieceRecord {
                                class: PieceKind::Pawn,
                                color: piece.color.opposite(),
                            }),
                            kind: MoveKind::EnPassantCapture(ep.captured_pawn_location()),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn advance_kind(stop: BoardLocation, piece: PieceRecord) -> MoveKind {
    if stop.1 == promotion_rank(piece.color) {
        MoveKind::PromoteToQueen
    } else {
        MoveKind::Regular
    }
}
