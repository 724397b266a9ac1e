//! Perft node counting for move generator validation.
//!
//! Walks the legal move tree on copies of the `BitboardState` and tallies
//! leaf statistics. The counts are compared against published reference
//! values for standard test positions.

use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::{Move, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn leaf(mv: Move, mut after: BitboardState, mover: Color) -> Self {
        let defender = mover.opposite();
        let gives_check = is_king_in_check(&after, defender);
        let is_checkmate = gives_check && generate_legal_moves(&mut after, defender).is_empty();

        PerftCounts {
            nodes: 1,
            captures: u64::from(mv.is_capture()),
            en_passant: u64::from(mv.kind == MoveKind::EnPassant),
            castles: u64::from(mv.is_castle()),
            promotions: u64::from(mv.is_promotion()),
            checks: u64::from(gives_check),
            checkmates: u64::from(is_checkmate),
        }
    }
}

/// Full leaf statistics at `depth`.
pub fn perft(state: &BitboardState, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut root = *state;
    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(&mut root, side) {
        let mut next = root;
        apply_move(&mut next, side, mv);
        if depth == 1 {
            total.merge(PerftCounts::leaf(mv, next, side));
        } else {
            total.merge(perft(&next, side.opposite(), depth - 1));
        }
    }
    total
}

/// Leaf node count only; skips the per-leaf check analysis.
pub fn perft_nodes(state: &BitboardState, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut root = *state;
    let moves = generate_legal_moves(&mut root, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = root;
            apply_move(&mut next, side, mv);
            perft_nodes(&next, side.opposite(), depth - 1)
        })
        .sum()
}

/// Per-root-move node counts, handy when bisecting a perft mismatch.
pub fn perft_divide(state: &BitboardState, side: Color, depth: u8) -> Vec<(Move, u64)> {
    let mut root = *state;
    generate_legal_moves(&mut root, side)
        .into_iter()
        .map(|mv| {
            let mut next = root;
            apply_move(&mut next, side, mv);
            (mv, perft_nodes(&next, side.opposite(), depth.saturating_sub(1)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, perft_nodes};
    use crate::game_state::bitboard_state::BitboardState;
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn nodes(fen: &str, depth: u8) -> u64 {
        let (state, side) = parse_fen(fen).expect("FEN should parse");
        perft_nodes(&state, side, depth)
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let state = BitboardState::starting_position();
        assert_eq!(perft(&state, Color::White, 0).nodes, 1);
    }

    #[test]
    fn start_position_reference_counts() {
        let state = BitboardState::starting_position();
        assert_eq!(perft_nodes(&state, Color::White, 1), 20);
        assert_eq!(perft_nodes(&state, Color::White, 2), 400);

        let d3 = perft(&state, Color::White, 3);
        assert_eq!(d3.nodes, 8902);
        assert_eq!(d3.captures, 34);
        assert_eq!(d3.checks, 12);
        assert_eq!(d3.checkmates, 0);
    }

    #[test]
    fn kiwipete_reference_counts() {
        let (state, side) = parse_fen(KIWIPETE).expect("FEN should parse");

        let d1 = perft(&state, side, 1);
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);

        let d2 = perft(&state, side, 2);
        assert_eq!(d2.nodes, 2039);
        assert_eq!(d2.captures, 351);
        assert_eq!(d2.en_passant, 1);
        assert_eq!(d2.castles, 91);
        assert_eq!(d2.checks, 3);
    }

    #[test]
    fn position_3_reference_counts() {
        assert_eq!(nodes(POSITION_3, 1), 14);
        assert_eq!(nodes(POSITION_3, 2), 191);

        let (state, side) = parse_fen(POSITION_3).expect("FEN should parse");
        let d3 = perft(&state, side, 3);
        assert_eq!(d3.nodes, 2812);
        assert_eq!(d3.captures, 209);
        assert_eq!(d3.en_passant, 2);
        assert_eq!(d3.checks, 267);
    }

    #[test]
    fn promotion_heavy_positions_match_reference() {
        assert_eq!(nodes(POSITION_4, 1), 6);
        assert_eq!(nodes(POSITION_4, 2), 264);
        assert_eq!(nodes(POSITION_5, 1), 44);
        assert_eq!(nodes(POSITION_5, 2), 1486);
    }

    #[test]
    fn divide_sums_to_total() {
        let state = BitboardState::starting_position();
        let divide = perft_divide(&state, Color::White, 2);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
