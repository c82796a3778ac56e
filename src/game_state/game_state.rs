//! Central game-state value.
//!
//! `GameState` couples the board with every piece of rule bookkeeping that
//! must change in lockstep with it: side to move, castling rights, the
//! en-passant flag, and the move clocks. It is passed into and returned from
//! every operation; nothing in the engine mutates a state it does not own.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    king_home, kingside_rook_home, queenside_rook_home, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    CastlingRights, Color, EnPassantState, PieceKind, PieceRecord,
};
use crate::utils::fen_generator::{generate_fen, generate_placement};
use crate::utils::fen_parser::{parse_fen, parse_placement};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<EnPassantState>,

    /// Applied plies since this state was set up.
    pub move_counter: u16,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl GameState {
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Build a state from a bare piece-placement field: Light to move, no
    /// en-passant history, castling rights inferred from home-square
    /// occupancy.
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        let board = parse_placement(placement)?;
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

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn placement_string(&self) -> String {
        generate_placement(&self.board)
    }
}

/// Castling rights a board's occupancy still permits: a right survives only
/// while its king and rook both stand on their home squares. Used when
/// restoring from formats that do not carry rights.
pub fn inferred_castling_rights(board: &Board) -> CastlingRights {
    fn occupant(board: &Board, loc: (i8, i8)) -> Option<PieceRecord> {
        board.get(loc).ok().flatten()
    }

    let mut rights = CastlingRights::none();
    for color in [Color::Light, Color::Dark] {
        let king = PieceRecord {
            class: PieceKind::King,
            color,
        };
        let rook = PieceRecord {
            class: PieceKind::Rook,
            color,
        };
        if occupant(board, king_home(color)) != Some(king) {
            continue;
        }
        if occupant(board, kingside_rook_home(color)) == Some(rook) {
            match color {
                Color::Light => rights.light_kingside = true,
                Color::Dark => rights.dark_kingside = true,
            }
        }
        if occupant(board, queenside_rook_home(color)) == Some(rook) {
            match color {
                Color::Light => rights.light_queenside = true,
                Color::Dark => rights.dark_queenside = true,
            }
        }
    }
    rights
}
