//! Square/bit conversions and bitboard iteration.
//!
//! Masks are oriented from White's view with the most significant bit on a1
//! and the least significant bit on h8. Square indexes stay `rank * 8 + file`,
//! so `square_mask(0)` is `1 << 63` and `leading_zeros` of a one-hot mask is
//! its square index.

use crate::game_state::chess_types::{Bitboard, Square};

pub const A_FILE: Bitboard = 0x8080_8080_8080_8080;
pub const B_FILE: Bitboard = 0x4040_4040_4040_4040;
pub const G_FILE: Bitboard = 0x0202_0202_0202_0202;
pub const H_FILE: Bitboard = 0x0101_0101_0101_0101;

pub const RANK_1: Bitboard = 0xff00_0000_0000_0000;
pub const RANK_2: Bitboard = 0x00ff_0000_0000_0000;
pub const RANK_7: Bitboard = 0x0000_0000_0000_ff00;
pub const RANK_8: Bitboard = 0x0000_0000_0000_00ff;

#[inline]
pub const fn square_mask(square: Square) -> Bitboard {
    1u64 << (63 - square as u32)
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Square of a bitboard's first set bit in a1..h8 order.
#[inline]
pub const fn first_square(bitboard: Bitboard) -> Option<Square> {
    if bitboard == 0 {
        None
    } else {
        Some(bitboard.leading_zeros() as Square)
    }
}

/// Remove and return the first set square.
#[inline]
pub fn pop_square(bitboard: &mut Bitboard) -> Option<Square> {
    let square = first_square(*bitboard)?;
    *bitboard ^= square_mask(square);
    Some(square)
}

/// Iterate the squares of a bitboard in a1..h8 order.
#[inline]
pub fn squares(bitboard: Bitboard) -> Squares {
    Squares(bitboard)
}

#[derive(Debug, Clone, Copy)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        pop_square(&mut self.0)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

/// Offset a square by file/rank deltas, `None` when it leaves the board.
#[inline]
pub const fn offset_square(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = (square % 8) as i8 + file_delta;
    let rank = (square / 8) as i8 + rank_delta;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some((rank * 8 + file) as Square)
    }
}

/// Mask of the square at `(file, rank)`, or empty when off the board.
pub(crate) const fn mask_if_valid(file: i32, rank: i32) -> Bitboard {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    square_mask((rank * 8 + file) as Square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a1_is_most_significant_and_h8_least() {
        assert_eq!(square_mask(0), 1u64 << 63);
        assert_eq!(square_mask(63), 1);
        assert_eq!(square_mask(0) & A_FILE & RANK_1, square_mask(0));
        assert_eq!(square_mask(63) & H_FILE & RANK_8, 1);
    }

    #[test]
    fn file_and_rank_masks_contain_eight_squares() {
        for mask in [A_FILE, B_FILE, G_FILE, H_FILE, RANK_1, RANK_2, RANK_7, RANK_8] {
            assert_eq!(mask.count_ones(), 8);
        }
        assert_eq!(A_FILE & RANK_2, square_mask(8));
    }

    #[test]
    fn squares_iterates_in_board_order() {
        let bb = square_mask(40) | square_mask(3) | square_mask(17);
        let got: Vec<_> = squares(bb).collect();
        assert_eq!(got, vec![3, 17, 40]);
    }

    #[test]
    fn offset_square_stays_on_board() {
        assert_eq!(offset_square(0, -1, 0), None);
        assert_eq!(offset_square(7, 1, 0), None);
        assert_eq!(offset_square(12, 0, 2), Some(28));
        assert_eq!(offset_square(63, 0, 1), None);
    }
}
