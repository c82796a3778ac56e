//! Conversions for long algebraic coordinates.
//!
//! Converts between human-readable square names (e.g., `e4`) and the internal
//! `(file, rank)` representation reused by the FEN and interface components.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::BoardLocation;

/// Convert long algebraic notation (for example: "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> ChessResult<BoardLocation> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::MalformedText(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::MalformedText(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::MalformedText(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a board location to long algebraic notation (for example: "e4").
#[inline]
pub fn location_to_algebraic(loc: BoardLocation) -> ChessResult<String> {
    if (loc.0 < 0) | (loc.0 > 7) | (loc.1 < 0) | (loc.1 > 7) {
        return Err(ChessError::OutOfBounds(loc));
    }

    let file_char = char::from(b'a' + loc.0 as u8);
    let rank_char = char::from(b'1' + loc.1 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_location("a1").expect("a1 should parse"), (0, 0));
        assert_eq!(algebraic_to_location("h8").expect("h8 should parse"), (7, 7));
        assert_eq!(location_to_algebraic((0, 0)).expect("(0,0) should convert"), "a1");
        assert_eq!(location_to_algebraic((7, 7)).expect("(7,7) should convert"), "h8");
    }

    #[test]
    fn rejects_off_board_input() {
        assert!(algebraic_to_location("i1").is_err());
        assert!(algebraic_to_location("a9").is_err());
        assert!(algebraic_to_location("e").is_err());
        assert!(location_to_algebraic((8, 0)).is_err());
    }
}
