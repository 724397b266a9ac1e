//! King attack table.
//!
//! Used both for king move generation and for the opponent's attacked-squares
//! mask, where the enemy king's reach matters as much as any other piece.

use crate::game_state::bitboard::mask_if_valid;
use crate::game_state::chess_types::{Bitboard, Square};

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= mask_if_valid(file - 1, rank - 1);
        attacks |= mask_if_valid(file, rank - 1);
        attacks |= mask_if_valid(file + 1, rank - 1);
        attacks |= mask_if_valid(file - 1, rank);
        attacks |= mask_if_valid(file + 1, rank);
        attacks |= mask_if_valid(file - 1, rank + 1);
        attacks |= mask_if_valid(file, rank + 1);
        attacks |= mask_if_valid(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let a1 = 0u8;
        assert_eq!(KING_ATTACKS[a1 as usize].count_ones(), 3);
        assert_eq!(king_attacks(a1).count_ones(), 3);
    }

    #[test]
    fn king_attacks_from_e4_has_eight_targets() {
        assert_eq!(king_attacks(28).count_ones(), 8);
    }
}
