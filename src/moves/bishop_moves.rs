//! Bishop rays and occupancy-aware bishop attacks.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::rook_moves::{trace_ray, trace_ray_const};

pub const BISHOP_RAYS: [Bitboard; 64] = generate_bishop_rays();

pub(crate) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let sq = square as i32;
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(sq, df, dr, occupancy))
}

const fn generate_bishop_rays() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        table[sq] = trace_ray_const(sq_i, 1, 1)
            | trace_ray_const(sq_i, 1, -1)
            | trace_ray_const(sq_i, -1, 1)
            | trace_ray_const(sq_i, -1, -1);
        sq += 1;
    }

    table
}
