//! Pluggable board evaluation interface and the material baseline.
//!
//! Search delegates static position scoring to this trait so alternate
//! heuristics can be swapped without altering search code.

use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Color, PieceKind};

/// Mate sentinel. Never summed into material totals.
pub const KING_VALUE: i32 = 20_000;

pub trait BoardScorer {
    /// Score from the perspective of `side_to_move`.
    fn score(&self, state: &BitboardState, side_to_move: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => KING_VALUE,
        }
    }

    #[inline]
    fn material(state: &BitboardState, color: Color) -> i32 {
        PieceKind::ALL
            .into_iter()
            .filter(|piece| *piece != PieceKind::King)
            .map(|piece| state.count(color, piece) as i32 * Self::piece_value(piece))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, state: &BitboardState, side_to_move: Color) -> i32 {
        Self::material(state, side_to_move) - Self::material(state, side_to_move.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::bitboard_state::BitboardState;
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_is_balanced() {
        let state = BitboardState::starting_position();
        assert_eq!(MaterialScorer.score(&state, Color::White), 0);
        assert_eq!(MaterialScorer.score(&state, Color::Black), 0);
    }

    #[test]
    fn score_is_relative_to_side_to_move() {
        let (state, _) = parse_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&state, Color::White), 500);
        assert_eq!(MaterialScorer.score(&state, Color::Black), -500);
    }

    #[test]
    fn mirrored_position_negates_score() {
        let (original, _) = parse_fen("r1b1k3/pp3ppp/2n5/8/3Q4/8/PP3PPP/4K2R w K - 0 1")
            .expect("FEN should parse");
        let (mirrored, _) = parse_fen("4k2r/pp3ppp/8/3q4/8/2N5/PP3PPP/R1B1K3 b k - 0 1")
            .expect("FEN should parse");

        let white_view = MaterialScorer.score(&original, Color::White);
        assert_ne!(white_view, 0);
        assert_eq!(MaterialScorer.score(&mirrored, Color::White), -white_view);
        assert_eq!(MaterialScorer.score(&mirrored, Color::Black), white_view);
    }
}
