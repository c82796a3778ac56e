use crate::game_state::chess_types::{BoardLocation, PieceRecord};

/// Special handling a move needs beyond relocating its piece. The tag drives
/// both the extra legality layer (castling path checks) and the apply-time
/// side effects (rook relocation, separately-located en-passant capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Regular,
    DoublePawnPush,
    /// Payload is the captured pawn's location, which is not the destination.
    EnPassantCapture(BoardLocation),
    CastleKingside,
    CastleQueenside,
    PromoteToQueen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub piece: PieceRecord,
    pub captured: Option<PieceRecord>,
    pub kind: MoveKind,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || matches!(self.kind, MoveKind::EnPassantCapture(_))
    }

    /// Converts this move to long algebraic notation (e.g., "e2e4", "e7e8q").
    pub fn to_long_algebraic(&self) -> String {
        fn square_to_str(loc: &BoardLocation) -> String {
            let file = (b'a' + loc.0 as u8) as char;
            let rank = (b'1' + loc.1 as u8) as char;
            format!("{}{}", file, rank)
        }
        let mut s = format!("{}{}", square_to_str(&self.start), square_to_str(&self.stop));
        if matches!(self.kind, MoveKind::PromoteToQueen) {
            s.push('q');
        }
        s
    }
}
