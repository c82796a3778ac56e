//! Perft: exhaustive legal-move tree counting.
//!
//! Used by tests and benches as a whole-engine correctness probe: a single
//! wrong castling, en-passant, or pin rule shows up as a node-count mismatch
//! within a few plies.

use crate::chess_move::MoveKind;
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    for mv in legal_moves(game_state, game_state.side_to_move)? {
        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
            match mv.kind {
                MoveKind::EnPassantCapture(_) => total.en_passant += 1,
                MoveKind::CastleKingside | MoveKind::CastleQueenside => total.castles += 1,
                MoveKind::PromoteToQueen => total.promotions += 1,
                _ => {}
            }
        } else {
            let next = apply_move(game_state, &mv)?;
            total.merge(perft_legal(&next, depth - 1)?);
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_counts_match_the_known_tree() {
        let game = GameState::new_game();

        let d1 = perft_legal(&game, 1).expect("perft should run");
        assert_eq!(d1.nodes, 20);
        assert_eq!(d1.captures, 0);

        let d2 = perft_legal(&game, 2).expect("perft should run");
        assert_eq!(d2.nodes, 400);

        let d3 = perft_legal(&game, 3).expect("perft should run");
        assert_eq!(d3.nodes, 8902);
        assert_eq!(d3.captures, 34);
        assert_eq!(d3.en_passant, 0);
    }

    #[test]
    fn depth_zero_is_one_node() {
        let game = GameState::new_game();
        let counts = perft_legal(&game, 0).expect("perft should run");
        assert_eq!(counts.nodes, 1);
    }
}
