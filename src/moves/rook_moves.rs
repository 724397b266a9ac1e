//! Rook rays and occupancy-aware rook attacks.

use crate::game_state::bitboard::square_mask;
use crate::game_state::chess_types::{Bitboard, Square};

pub const ROOK_RAYS: [Bitboard; 64] = generate_rook_rays();

pub(crate) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let sq = square as i32;
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(sq, df, dr, occupancy))
}

const fn generate_rook_rays() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 0, 1);
        rays |= trace_ray_const(sq_i, 0, -1);
        rays |= trace_ray_const(sq_i, 1, 0);
        rays |= trace_ray_const(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}

/// Walk one direction, including the first blocker, stopping at the edge.
pub(crate) fn trace_ray(square: i32, file_step: i32, rank_step: i32, occupancy: Bitboard) -> Bitboard {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = square_mask((rank * 8 + file) as Square);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

pub(crate) const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> Bitboard {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        attacks |= square_mask((rank * 8 + file) as Square);
        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::{rook_attacks, ROOK_RAYS};
    use crate::game_state::bitboard::square_mask;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4 = 27u8;
        assert_eq!(ROOK_RAYS[d4 as usize].count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = square_mask(24);
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & square_mask(24), 0);
        assert_eq!(attacks & square_mask(32), 0);
        assert_ne!(attacks & square_mask(7), 0);
    }
}
