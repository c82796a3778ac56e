//! 8×8 mailbox board.
//!
//! Stores one optional occupant per square with bounds-checked access. The
//! board is a plain value: simulation works on owned clones that are simply
//! discarded, never on shared mutable state.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind, PieceRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Indexed [rank][file]; access goes through `get`/`set`.
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    fn index(loc: BoardLocation) -> ChessResult<(usize, usize)> {
        if (loc.0 < 0) | (loc.0 > 7) | (loc.1 < 0) | (loc.1 > 7) {
            Err(ChessError::OutOfBounds(loc))
        } else {
            Ok((loc.1 as usize, loc.0 as usize))
        }
    }

    pub fn get(&self, loc: BoardLocation) -> ChessResult<Option<PieceRecord>> {
        let (rank, file) = Self::index(loc)?;
        Ok(self.squares[rank][file])
    }

    pub fn set(&mut self, loc: BoardLocation, occupant: Option<PieceRecord>) -> ChessResult<()> {
        let (rank, file) = Self::index(loc)?;
        self.squares[rank][file] = occupant;
        Ok(())
    }

    /// Move whatever stands on `from` onto `to`, returning the occupant that
    /// was overwritten on `to`.
    pub fn relocate(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> ChessResult<Option<PieceRecord>> {
        let mover = self.get(from)?;
        let displaced = self.get(to)?;
        self.set(from, None)?;
        self.set(to, mover)?;
        Ok(displaced)
    }

    /// Full-board scan for a side's king. Absence is a valid state (used
    /// mid-setup); dependent checks degrade to "not in check".
    pub fn find_king(&self, color: Color) -> Option<BoardLocation> {
        for rank in 0..8i8 {
            for file in 0..8i8 {
                if let Some(piece) = self.squares[rank as usize][file as usize] {
                    if piece.class == PieceKind::King && piece.color == color {
                        return Some((file, rank));
                    }
                }
            }
        }
        None
    }

    /// Locations of every piece belonging to `color`, rank-major.
    pub fn locations_of(&self, color: Color) -> Vec<BoardLocation> {
        let mut found = Vec::new();
        for rank in 0..8i8 {
            for file in 0..8i8 {
                if let Some(piece) = self.squares[rank as usize][file as usize] {
                    if piece.color == color {
                        found.push((file, rank));
                    }
                }
            }
        }
        found
    }
}
