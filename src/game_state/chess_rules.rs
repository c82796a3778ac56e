//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals: the standard starting
//! position, pawn movement geometry per color, and the home squares that
//! anchor castling bookkeeping.

use crate::game_state::chess_types::{BoardLocation, Color};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece-placement field of the starting position, used when collaborators
/// hand over board-only setup strings.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Rank direction a pawn advances in.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}

/// Rank a pawn double-push starts from.
#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Opponent's back rank, where a pawn promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Back rank holding a side's king and rooks at game start.
#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[inline]
pub const fn king_home(color: Color) -> BoardLocation {
    (4, back_rank(color))
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> BoardLocation {
    (7, back_rank(color))
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> BoardLocation {
    (0, back_rank(color))
}
