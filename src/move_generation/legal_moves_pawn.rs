//! Pawn pushes, captures, en passant and promotions.
//!
//! A pawn reaching the last rank expands into one move per promotion piece;
//! there is no "unpromoted" last-rank move.

use crate::game_state::bitboard::{rank_of, square_mask, squares};
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::chess_move::{Move, MoveKind};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    let enemy = side.opposite();
    let enemy_occ = state.color_mask(enemy);
    let empty = !state.occupancy_all;
    let push = side.pawn_push();

    for from in squares(state.piece_mask(side, PieceKind::Pawn)) {
        if rank_of(from) == side.promotion_rank() {
            continue;
        }

        let one_step = (from as i8 + push) as Square;
        if square_mask(one_step) & empty != 0 {
            push_pawn_move(side, from, one_step, None, out);

            if rank_of(from) == side.pawn_start_rank() {
                let two_step = (one_step as i8 + push) as Square;
                if square_mask(two_step) & empty != 0 {
                    out.push(Move::new(
                        from,
                        two_step,
                        PieceKind::Pawn,
                        None,
                        None,
                        MoveKind::DoublePush,
                    ));
                }
            }
        }

        let attacks = pawn_attacks(side, from);
        for to in squares(attacks & enemy_occ) {
            push_pawn_move(side, from, to, state.piece_of(enemy, to), out);
        }

        if attacks & state.en_passant != 0 {
            for to in squares(attacks & state.en_passant) {
                out.push(Move::new(
                    from,
                    to,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    MoveKind::EnPassant,
                ));
            }
        }
    }
}

fn push_pawn_move(
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    out: &mut Vec<Move>,
) {
    if rank_of(to) == side.promotion_rank() {
        for promo in PieceKind::PROMOTIONS {
            out.push(Move::new(from, to, PieceKind::Pawn, captured, Some(promo), MoveKind::Normal));
        }
    } else {
        out.push(Move::normal(from, to, PieceKind::Pawn, captured));
    }
}
