//! Attack, pin and check analysis.
//!
//! `refresh_threats` fills the attacked-squares and pinned-squares masks of
//! the side to move and reports the pieces currently giving check. The
//! attacked-squares mask is built with the defending king lifted off the
//! board so a king cannot step backwards along a slider's ray.

use crate::game_state::bitboard::{square_mask, squares};
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Bitboard, Color, PieceKind, Square};
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::geometry::between;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

/// Threat summary for the side to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Threats {
    pub king_square: Option<Square>,
    pub checkers: Bitboard,
}

impl Threats {
    #[inline]
    pub fn in_check(&self) -> bool {
        self.checkers != 0
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checkers.count_ones() >= 2
    }
}

/// Recompute `attacked_squares[side]` and `pinned_squares[side]`.
pub fn refresh_threats(state: &mut BitboardState, side: Color) -> Threats {
    let enemy = side.opposite();
    let king_square = state.king_square(side);
    let king_mask = king_square.map(square_mask).unwrap_or(0);

    state.attacked_squares[side.index()] =
        attacked_squares(state, enemy, state.occupancy_all & !king_mask);

    let Some(king_sq) = king_square else {
        state.pinned_squares[side.index()] = 0;
        return Threats::default();
    };

    state.pinned_squares[side.index()] = pinned_squares(state, side, king_sq);

    Threats {
        king_square,
        checkers: checkers_of(state, king_sq, enemy),
    }
}

/// Every square `attacker` reaches or defends under the given occupancy.
pub fn attacked_squares(state: &BitboardState, attacker: Color, occupancy: Bitboard) -> Bitboard {
    let mut attacked = 0u64;

    for sq in squares(state.piece_mask(attacker, PieceKind::Pawn)) {
        attacked |= pawn_attacks(attacker, sq);
    }
    for sq in squares(state.piece_mask(attacker, PieceKind::Knight)) {
        attacked |= knight_attacks(sq);
    }

    let diagonal = state.piece_mask(attacker, PieceKind::Bishop) | state.piece_mask(attacker, PieceKind::Queen);
    for sq in squares(diagonal) {
        attacked |= bishop_attacks(sq, occupancy);
    }

    let orthogonal = state.piece_mask(attacker, PieceKind::Rook) | state.piece_mask(attacker, PieceKind::Queen);
    for sq in squares(orthogonal) {
        attacked |= rook_attacks(sq, occupancy);
    }

    for sq in squares(state.piece_mask(attacker, PieceKind::King)) {
        attacked |= king_attacks(sq);
    }

    attacked
}

/// Pieces of `attacker` attacking `square` with the current occupancy.
pub fn checkers_of(state: &BitboardState, square: Square, attacker: Color) -> Bitboard {
    let occupancy = state.occupancy_all;
    let defender = attacker.opposite();

    let diagonal = state.piece_mask(attacker, PieceKind::Bishop) | state.piece_mask(attacker, PieceKind::Queen);
    let orthogonal = state.piece_mask(attacker, PieceKind::Rook) | state.piece_mask(attacker, PieceKind::Queen);

    (pawn_attacks(defender, square) & state.piece_mask(attacker, PieceKind::Pawn))
        | (knight_attacks(square) & state.piece_mask(attacker, PieceKind::Knight))
        | (king_attacks(square) & state.piece_mask(attacker, PieceKind::King))
        | (bishop_attacks(square, occupancy) & diagonal)
        | (rook_attacks(square, occupancy) & orthogonal)
}

#[inline]
pub fn is_square_attacked(state: &BitboardState, square: Square, attacker: Color) -> bool {
    checkers_of(state, square, attacker) != 0
}

#[inline]
pub fn is_king_in_check(state: &BitboardState, color: Color) -> bool {
    state
        .king_square(color)
        .is_some_and(|king_sq| is_square_attacked(state, king_sq, color.opposite()))
}

/// Own pieces of `side` that are the only blocker between their king and an
/// enemy slider on the same line.
pub fn pinned_squares(state: &BitboardState, side: Color, king_sq: Square) -> Bitboard {
    let enemy = side.opposite();
    let own = state.color_mask(side);

    let diagonal = state.piece_mask(enemy, PieceKind::Bishop) | state.piece_mask(enemy, PieceKind::Queen);
    let orthogonal = state.piece_mask(enemy, PieceKind::Rook) | state.piece_mask(enemy, PieceKind::Queen);
    let snipers = (BISHOP_RAYS[king_sq as usize] & diagonal) | (ROOK_RAYS[king_sq as usize] & orthogonal);

    let mut pinned = 0u64;
    for sniper in squares(snipers) {
        let blockers = between(king_sq, sniper) & state.occupancy_all;
        if blockers.count_ones() == 1 && blockers & own != 0 {
            pinned |= blockers;
        }
    }
    pinned
}
