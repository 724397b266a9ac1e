//! King steps and castling candidates.
//!
//! Castling is emitted when the right is held and every square between king
//! and rook is empty. Whether the king passes through an attacked square is
//! decided by the legality filter, which owns the attacked-squares mask.

use crate::game_state::bitboard::square_mask;
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Bitboard, Color, PieceKind, Square};
use crate::move_generation::legal_move_apply::back_rank_base;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::chess_move::{Move, MoveKind};
use crate::moves::geometry::between;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    generate_piece_moves(state, side, PieceKind::King, out, |from, _| king_attacks(from));
    generate_castling_moves(state, side, out);
}

fn generate_castling_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    let base = back_rank_base(side);
    let king_from = base + 4;
    if state.piece_mask(side, PieceKind::King) & square_mask(king_from) == 0 {
        return;
    }

    for (kind, rook_sq, king_to) in [
        (MoveKind::KingSideCastle, base + 7, base + 6),
        (MoveKind::QueenSideCastle, base, base + 2),
    ] {
        if castle_path_clear(state, side, king_from, rook_sq) {
            out.push(Move::new(king_from, king_to, PieceKind::King, None, None, kind));
        }
    }
}

fn castle_path_clear(state: &BitboardState, side: Color, king_from: Square, rook_sq: Square) -> bool {
    let rook_mask: Bitboard = square_mask(rook_sq);
    state.castle_rights & rook_mask != 0
        && state.piece_mask(side, PieceKind::Rook) & rook_mask != 0
        && state.occupancy_all & between(king_from, rook_sq) == 0
}

/// Squares the king stands on, crosses and lands on while castling.
pub fn castle_king_path(side: Color, kind: MoveKind) -> Bitboard {
    let base = back_rank_base(side);
    match kind {
        MoveKind::KingSideCastle => square_mask(base + 4) | square_mask(base + 5) | square_mask(base + 6),
        MoveKind::QueenSideCastle => square_mask(base + 4) | square_mask(base + 3) | square_mask(base + 2),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::bitboard_state::BitboardState;
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn boxed_in_king_has_no_moves_at_start() {
        let state = BitboardState::starting_position();
        let mut out = Vec::new();
        generate_king_moves(&state, Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn both_castles_offered_with_clear_path() {
        let (state, side) = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&state, side, &mut out);
        assert_eq!(out.iter().filter(|mv| mv.is_castle()).count(), 2);
    }

    #[test]
    fn queen_side_castle_needs_b_file_empty() {
        let (state, side) = parse_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&state, side, &mut out);
        assert_eq!(out.iter().filter(|mv| mv.is_castle()).count(), 0);
    }
}
