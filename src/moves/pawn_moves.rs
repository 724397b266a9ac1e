//! Pawn capture tables, one per color.

use crate::game_state::bitboard::mask_if_valid;
use crate::game_state::chess_types::{Bitboard, Color, Square};

pub const WHITE_PAWN_ATTACKS: [Bitboard; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [Bitboard; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(direction: i32) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        table[sq] =
            mask_if_valid(file - 1, rank + direction) | mask_if_valid(file + 1, rank + direction);
        sq += 1;
    }

    table
}
