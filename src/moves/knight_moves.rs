//! Knight attack table.

use crate::game_state::bitboard::mask_if_valid;
use crate::game_state::chess_types::{Bitboard, Square};

pub const KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= mask_if_valid(file + 1, rank + 2);
        attacks |= mask_if_valid(file + 2, rank + 1);
        attacks |= mask_if_valid(file + 2, rank - 1);
        attacks |= mask_if_valid(file + 1, rank - 2);
        attacks |= mask_if_valid(file - 1, rank - 2);
        attacks |= mask_if_valid(file - 2, rank - 1);
        attacks |= mask_if_valid(file - 2, rank + 1);
        attacks |= mask_if_valid(file - 1, rank + 2);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};
    use crate::game_state::bitboard::square_mask;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(KNIGHT_ATTACKS[d4 as usize].count_ones(), 8);
    }

    #[test]
    fn knight_on_g1_reaches_f3_h3_e2() {
        let g1 = 6u8;
        let expected = square_mask(21) | square_mask(23) | square_mask(12);
        assert_eq!(knight_attacks(g1), expected);
    }
}
