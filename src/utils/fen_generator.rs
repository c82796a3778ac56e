//! GameState-to-FEN generator.
//!
//! Produces the piece-placement field (ranks 7→0 with run-length-encoded
//! empties) and the full six-field FEN form for save/interchange.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, PieceRecord};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::location_to_algebraic;

/// Single piece→char table shared by FEN placement and the 64-cell state
/// string; the inverse of `fen_parser::piece_from_fen_char`.
pub fn fen_char_for_piece(piece: PieceRecord) -> char {
    let lower = match piece.class {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => lower.to_ascii_uppercase(),
        Color::Dark => lower,
    }
}

pub fn generate_placement(board: &Board) -> String {
    let mut result = String::new();

    for rank in (0..8i8).rev() {
        let mut empty_run = 0u8;
        for file in 0..8i8 {
            match board.get((file, rank)) {
                Ok(Some(piece)) => {
                    if empty_run > 0 {
                        result.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    result.push(fen_char_for_piece(piece));
                }
                _ => empty_run += 1,
            }
        }
        if empty_run > 0 {
            result.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            result.push('/');
        }
    }

    result
}

pub fn generate_fen(game_state: &GameState) -> String {
    let mut result = generate_placement(&game_state.board);

    result.push(' ');
    result.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    result.push(' ');
    let rights = game_state.castling_rights;
    if rights == CastlingRights::none() {
        result.push('-');
    } else {
        if rights.light_kingside {
            result.push('K');
        }
        if rights.light_queenside {
            result.push('Q');
        }
        if rights.dark_kingside {
            result.push('k');
        }
        if rights.dark_queenside {
            result.push('q');
        }
    }

    result.push(' ');
    match game_state
        .en_passant
        .and_then(|ep| location_to_algebraic(ep.target).ok())
    {
        Some(square) => result.push_str(&square),
        None => result.push('-'),
    }

    result.push(' ');
    result.push_str(&game_state.halfmove_clock.to_string());
    result.push(' ');
    result.push_str(&game_state.fullmove_number.to_string());

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn placement_round_trip_preserves_occupancy() {
        let placements = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "8/bpp1k2p/p2pP1p1/P5q1/1P5N/8/6PP/5Q1K",
            "r3k2r/8/8/8/8/8/8/R3K2R",
        ];
        for placement in placements {
            let board = parse_placement(placement).expect("placement should parse");
            assert_eq!(generate_placement(&board), placement);
        }
    }

    #[test]
    fn empty_board_is_all_eights() {
        let board = crate::game_state::board::Board::empty();
        assert_eq!(generate_placement(&board), "8/8/8/8/8/8/8/8");
    }
}
