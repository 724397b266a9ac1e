//! Helpers shared by the per-piece generators.

use crate::game_state::bitboard::squares;
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Bitboard, Color, PieceKind, Square};
use crate::moves::chess_move::Move;

/// Push one normal move per target square, tagging captures with the enemy
/// piece standing there.
#[inline]
pub fn push_targets(
    state: &BitboardState,
    side: Color,
    from: Square,
    piece: PieceKind,
    targets: Bitboard,
    out: &mut Vec<Move>,
) {
    let enemy = side.opposite();
    for to in squares(targets) {
        out.push(Move::normal(from, to, piece, state.piece_of(enemy, to)));
    }
}

/// Generate moves for every `piece` of `side` using an attack function.
#[inline]
pub fn generate_piece_moves<F>(
    state: &BitboardState,
    side: Color,
    piece: PieceKind,
    out: &mut Vec<Move>,
    attacks: F,
) where
    F: Fn(Square, Bitboard) -> Bitboard,
{
    let own = state.color_mask(side);
    for from in squares(state.piece_mask(side, piece)) {
        let targets = attacks(from, state.occupancy_all) & !own;
        push_targets(state, side, from, piece, targets, out);
    }
}
