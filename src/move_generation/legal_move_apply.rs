//! Move execution on a `BitboardState`.
//!
//! Touches only the masks the move affects: the mover's piece and aggregate
//! masks, the captured piece's masks, the castling rook, then combined
//! occupancy, castle rights and the en passant target. Turn, counters and the
//! repetition log live one level up on `Board`.

use crate::game_state::bitboard::square_mask;
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::chess_move::{Move, MoveKind};

pub fn apply_move(state: &mut BitboardState, side: Color, mv: Move) {
    let enemy = side.opposite();

    if let Some(captured) = mv.captured {
        let capture_square = if mv.kind == MoveKind::EnPassant {
            en_passant_victim(side, mv.to)
        } else {
            mv.to
        };
        state.remove_piece(enemy, captured, capture_square);
    }

    state.remove_piece(side, mv.piece, mv.from);
    state.add_piece(side, mv.promotion.unwrap_or(mv.piece), mv.to);

    if let Some((rook_from, rook_to)) = castle_rook_squares(side, mv.kind) {
        state.remove_piece(side, PieceKind::Rook, rook_from);
        state.add_piece(side, PieceKind::Rook, rook_to);
    }

    state.occupancy_all = state.occupancy_by_color[0] | state.occupancy_by_color[1];

    update_castle_rights(state, side, mv);

    state.en_passant = if mv.kind == MoveKind::DoublePush {
        square_mask((mv.from + mv.to) / 2)
    } else {
        0
    };
}

/// Square of the pawn removed by an en passant capture landing on `to`.
#[inline]
pub fn en_passant_victim(side: Color, to: Square) -> Square {
    (to as i8 - side.pawn_push()) as Square
}

/// Rook origin and destination for a castle of `side`.
#[inline]
pub fn castle_rook_squares(side: Color, kind: MoveKind) -> Option<(Square, Square)> {
    let base = back_rank_base(side);
    match kind {
        MoveKind::KingSideCastle => Some((base + 7, base + 5)),
        MoveKind::QueenSideCastle => Some((base, base + 3)),
        _ => None,
    }
}

#[inline]
pub(crate) const fn back_rank_base(side: Color) -> Square {
    match side {
        Color::White => 0,
        Color::Black => 56,
    }
}

fn update_castle_rights(state: &mut BitboardState, side: Color, mv: Move) {
    if mv.piece == PieceKind::King {
        let base = back_rank_base(side);
        state.castle_rights &= !(square_mask(base) | square_mask(base + 7));
    }
    // A rook leaving its home square, or anything landing on one (capturing
    // the rook there), removes that corner's right.
    state.castle_rights &= !(square_mask(mv.from) | square_mask(mv.to));
}
