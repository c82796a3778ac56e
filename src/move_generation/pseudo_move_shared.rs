//! Shared geometry helpers for the per-piece pseudo-legal generators.
//!
//! Step pieces (knight, king) and sliding pieces (bishop, rook, queen) differ
//! only in their offset tables and in whether a direction is walked to
//! exhaustion, so both loops live here.

use crate::chess_move::{ChessMove, MoveKind};
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{move_board_location, BoardLocation, PieceRecord};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight compass directions, for the queen and the king's single steps.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// One square per offset, filtered to the board and to non-friendly targets.
pub fn push_step_moves(
    board: &Board,
    from: BoardLocation,
    piece: PieceRecord,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for (d_file, d_rank) in offsets {
        let Ok(stop) = move_board_location(from, *d_file, *d_rank) else {
            continue;
        };
        match board.get(stop)? {
            Some(target) if target.color == piece.color => {}
            occupant => out.push(ChessMove {
                start: from,
                stop,
                piece,
                captured: occupant,
                kind: MoveKind::Regular,
            }),
        }
    }
    Ok(())
}

/// Walk each direction until the board edge, a friendly piece (stop, exclude),
/// or an enemy piece (include as capture, then stop).
pub fn push_slide_moves(
    board: &Board,
    from: BoardLocation,
    piece: PieceRecord,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for (d_file, d_rank) in directions {
        let mut cursor = from;
        loop {
            let Ok(stop) = move_board_location(cursor, *d_file, *d_rank) else {
                break;
            };
            match board.get(stop)? {
                None => {
                    out.push(ChessMove {
                        start: from,
                        stop,
                        piece,
                        captured: None,
                        kind: MoveKind::Regular,
                    });
                    cursor = stop;
                }
                Some(target) => {
                    if target.color != piece.color {
                        out.push(ChessMove {
                            start: from,
                            stop,
                            piece,
                            captured: Some(target),
                            kind: MoveKind::Regular,
                        });
                    }
                    break;
                }
            }
        }
    }
    Ok(())
}
