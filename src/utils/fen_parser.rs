//! FEN-to-GameState parser.
//!
//! Builds fully-populated state from a Forsyth-Edwards Notation string. The
//! placement-field parser is also exposed on its own for collaborators that
//! hand over board-only setup strings. Parsing fails closed: any character or
//! shape that cannot be decoded yields `MalformedText` rather than being
//! skipped.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    BoardLocation, CastlingRights, Color, EnPassantState, PieceKind, PieceRecord,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_location;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedText("missing board layout in FEN".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedText("missing side-to-move in FEN".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedText("missing castling rights in FEN".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedText("missing en-passant square in FEN".to_owned()))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedText("missing halfmove clock in FEN".to_owned()))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedText("missing fullmove number in FEN".to_owned()))?;

    if parts.next().is_some() {
        return Err(ChessError::MalformedText(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    Ok(GameState {
        board: parse_placement(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant: parse_en_passant(en_passant_part)?,
        move_counter: 0,
        halfmove_clock: halfmove_part.parse::<u16>().map_err(|_| {
            ChessError::MalformedText(format!("invalid halfmove clock: {halfmove_part}"))
        })?,
        fullmove_number: fullmove_part.parse::<u16>().map_err(|_| {
            ChessError::MalformedText(format!("invalid fullmove number: {fullmove_part}"))
        })?,
    })
}

/// Parse a piece-placement field into a board. If a full FEN string is
/// supplied, only the first whitespace-delimited field is consumed.
pub fn parse_placement(text: &str) -> ChessResult<Board> {
    let placement = text
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessError::MalformedText("empty placement string".to_owned()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::MalformedText(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::MalformedText(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as i8;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::MalformedText(format!(
                    "invalid piece character '{ch}' in board layout"
                ))
            })?;

            if file >= 8 {
                return Err(ChessError::MalformedText(
                    "board rank has too many files".to_owned(),
                ));
            }

            board.set((file, board_rank), Some(piece))?;
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::MalformedText(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::MalformedText(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => {
                return Err(ChessError::MalformedText(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant(en_passant_part: &str) -> ChessResult<Option<EnPassantState>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target: BoardLocation = algebraic_to_location(en_passant_part)?;
    // The FEN field carries the capture destination (the push's midpoint);
    // the vulnerable pawn stands one rank beyond it.
    let captured_rank = match target.1 {
        2 => 3,
        5 => 4,
        _ => {
            return Err(ChessError::MalformedText(format!(
                "en-passant square {en_passant_part} is not on rank 3 or 6"
            )))
        }
    };

    Ok(Some(EnPassantState {
        target,
        captured_rank,
    }))
}

/// Single char→piece table shared by FEN placement and the 64-cell state
/// string: uppercase is Light, lowercase is Dark.
pub fn piece_from_fen_char(ch: char) -> Option<PieceRecord> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let class = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(PieceRecord { class, color })
}
