//! Fixed 64-character board encoding for save/restore.
//!
//! One character per square in row-major order (rank 0→7 outer, file 0→7
//! inner): `'0'` for an empty square, otherwise the FEN piece letter. This is
//! a distinct format from the FEN placement field (different square order,
//! fixed length, no run-length compression, no rank separators) and the two
//! are never interchangeable.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::utils::fen_generator::fen_char_for_piece;
use crate::utils::fen_parser::piece_from_fen_char;

pub fn generate_state_string(board: &Board) -> String {
    let mut result = String::with_capacity(64);
    for rank in 0..8i8 {
        for file in 0..8i8 {
            match board.get((file, rank)) {
                Ok(Some(piece)) => result.push(fen_char_for_piece(piece)),
                _ => result.push('0'),
            }
        }
    }
    result
}

pub fn parse_state_string(text: &str) -> ChessResult<Board> {
    let cells: Vec<char> = text.chars().collect();
    if cells.len() != 64 {
        return Err(ChessError::MalformedText(format!(
            "state string must be exactly 64 cells, got {}",
            cells.len()
        )));
    }

    let mut board = Board::empty();
    for (index, ch) in cells.into_iter().enumerate() {
        if ch == '0' {
            continue;
        }
        let piece = piece_from_fen_char(ch).ok_or_else(|| {
            ChessError::MalformedText(format!("invalid state-string cell '{ch}'"))
        })?;
        let file = (index % 8) as i8;
        let rank = (index / 8) as i8;
        board.set((file, rank), Some(piece))?;
    }

    Ok(board)
}
