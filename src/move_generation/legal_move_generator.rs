//! Full legal move generation pipeline.
//!
//! Refreshes the threat masks for the side to move, generates pseudo-legal
//! moves piece by piece, then narrows them in order: pin lines, check
//! resolution, king safety against the attacked-squares mask, and finally a
//! simulate-and-check pass on the survivors.

use std::collections::BTreeSet;

use crate::game_state::bitboard::{first_square, square_mask};
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Bitboard, Color, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, en_passant_victim};
use crate::move_generation::legal_move_checks::{is_square_attacked, refresh_threats, Threats};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{castle_king_path, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::{Move, MoveKind};
use crate::moves::geometry::{aligned, between};

/// Every move of `side` that obeys piece movement rules, ignoring whether it
/// leaves the king in check.
pub fn generate_pseudo_legal_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    generate_pawn_moves(state, side, out);
    generate_knight_moves(state, side, out);
    generate_bishop_moves(state, side, out);
    generate_rook_moves(state, side, out);
    generate_queen_moves(state, side, out);
    generate_king_moves(state, side, out);
}

/// Legal moves of `side`. Updates the side's attacked and pinned masks.
pub fn generate_legal_moves(state: &mut BitboardState, side: Color) -> BTreeSet<Move> {
    let threats = refresh_threats(state, side);

    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(state, side, &mut pseudo);

    let Some(king_sq) = threats.king_square else {
        // Kingless setups only appear in hand-built test positions.
        return pseudo.into_iter().collect();
    };

    let evasions = evasion_mask(threats, king_sq);
    let state: &BitboardState = state;
    let attacked = state.attacked_squares[side.index()];
    let pinned = state.pinned_squares[side.index()];

    pseudo
        .into_iter()
        .filter(|mv| {
            if mv.piece == PieceKind::King {
                return king_move_is_safe(*mv, side, attacked, threats);
            }
            stays_on_pin_line(*mv, pinned, king_sq)
                && resolves_check(*mv, side, threats, evasions)
                && !leaves_king_attacked(state, side, *mv, king_sq)
        })
        .collect()
}

/// Squares a non-king move must land on to answer the current check.
fn evasion_mask(threats: Threats, king_sq: Square) -> Bitboard {
    if threats.is_double_check() {
        return 0;
    }
    // Single checker: capture it or interpose.
    match first_square(threats.checkers) {
        Some(checker) => threats.checkers | between(king_sq, checker),
        None => !0,
    }
}

#[inline]
fn stays_on_pin_line(mv: Move, pinned: Bitboard, king_sq: Square) -> bool {
    pinned & square_mask(mv.from) == 0 || aligned(king_sq, mv.from, mv.to)
}

fn resolves_check(mv: Move, side: Color, threats: Threats, evasions: Bitboard) -> bool {
    if evasions & square_mask(mv.to) != 0 {
        return true;
    }
    // En passant can remove a checking pawn without landing on its square.
    mv.kind == MoveKind::EnPassant
        && !threats.is_double_check()
        && threats.checkers & square_mask(en_passant_victim(side, mv.to)) != 0
}

fn king_move_is_safe(mv: Move, side: Color, attacked: Bitboard, threats: Threats) -> bool {
    if mv.is_castle() {
        return !threats.in_check() && castle_king_path(side, mv.kind) & attacked == 0;
    }
    attacked & square_mask(mv.to) == 0
}

/// Apply the move to a scratch copy and test the king square directly.
fn leaves_king_attacked(state: &BitboardState, side: Color, mv: Move, king_sq: Square) -> bool {
    let mut scratch = *state;
    apply_move(&mut scratch, side, mv);
    is_square_attacked(&scratch, king_sq, side.opposite())
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, generate_pseudo_legal_moves};
    use crate::game_state::bitboard_state::BitboardState;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::moves::chess_move::MoveKind;
    use crate::utils::fen_parser::parse_fen;

    fn legal(fen: &str) -> Vec<crate::moves::chess_move::Move> {
        let (mut state, side) = parse_fen(fen).expect("FEN should parse");
        generate_legal_moves(&mut state, side).into_iter().collect()
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let mut state = BitboardState::starting_position();
        assert_eq!(generate_legal_moves(&mut state, Color::White).len(), 20);
        assert_eq!(generate_legal_moves(&mut state, Color::Black).len(), 20);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let moves = legal("4k3/8/2n5/1B6/8/8/8/4K3 b - - 0 1");
        assert!(moves.iter().all(|mv| mv.piece != PieceKind::Knight));
    }

    #[test]
    fn pinned_rook_may_slide_along_pin_line() {
        // Re7 pinned by Re1 against Ke8: only e-file moves remain for the rook.
        let moves = legal("4k3/4r3/8/8/8/8/8/K3R3 b - - 0 1");
        let rook_moves: Vec<_> = moves.iter().filter(|mv| mv.piece == PieceKind::Rook).collect();
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|mv| mv.to % 8 == 4));
    }

    #[test]
    fn single_check_allows_block_capture_or_king_move() {
        // Ra8+ against Ke8; Black may capture with the knight on b6, block
        // on c8 with the bishop from h3, or step off the rank.
        let moves = legal("R3k3/8/1n6/8/8/7b/8/4K3 b - - 0 1");
        assert!(moves
            .iter()
            .any(|mv| mv.piece == PieceKind::Knight && mv.to == 56));
        assert!(moves.iter().all(|mv| mv.piece != PieceKind::King || mv.to / 8 != 7));
        let bishop_moves: Vec<_> = moves.iter().filter(|mv| mv.piece == PieceKind::Bishop).collect();
        assert_eq!(bishop_moves.len(), 1);
        assert_eq!(bishop_moves[0].to, 58);
    }

    #[test]
    fn double_check_allows_only_king_moves() {
        let moves = legal("4k3/8/5N2/8/8/8/3r4/K3R3 b - - 0 1");
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.piece == PieceKind::King));
    }

    #[test]
    fn king_cannot_step_back_along_checking_ray() {
        let moves = legal("R3k3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert!(moves.iter().all(|mv| mv.to != 61 && mv.to != 59));
        assert!(moves.iter().any(|mv| mv.to == 52));
    }

    #[test]
    fn castling_through_attacked_square_is_illegal() {
        // Black rook on f8 covers f1.
        let moves = legal("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<_> = moves.iter().filter(|mv| mv.is_castle()).collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].kind, MoveKind::QueenSideCastle);
    }

    #[test]
    fn castling_out_of_check_is_illegal() {
        let moves = legal("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(moves.iter().all(|mv| !mv.is_castle()));
    }

    #[test]
    fn en_passant_exposing_king_on_rank_is_illegal() {
        // Capturing d6 would lift both pawns off the fifth rank and expose
        // the king on a5 to the rook on h5.
        let moves = legal("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1");
        assert!(moves.iter().all(|mv| mv.kind != MoveKind::EnPassant));
    }

    #[test]
    fn en_passant_may_capture_checking_pawn() {
        // d7-d5 gives check to the king on e4; exd6 e.p. removes the checker.
        let moves = legal("4k3/8/8/3pP3/4K3/8/8/8 w - d6 0 1");
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::EnPassant));
    }

    #[test]
    fn pawn_one_step_from_promotion_yields_four_moves() {
        let moves = legal("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        let promotions: Vec<_> = moves.iter().filter(|mv| mv.is_promotion()).collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.from == 52 && mv.to == 60));
    }

    #[test]
    fn legal_never_exceeds_pseudo_legal() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "R3k3/8/1n6/8/8/7b/8/4K3 b - - 0 1",
        ] {
            let (mut state, side) = parse_fen(fen).expect("FEN should parse");
            let mut pseudo = Vec::new();
            generate_pseudo_legal_moves(&state, side, &mut pseudo);
            let legal = generate_legal_moves(&mut state, side);
            assert!(legal.len() <= pseudo.len());
        }
    }
}
