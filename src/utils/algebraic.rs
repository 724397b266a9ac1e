//! Square conversions for coordinate names (`e4`).
//!
//! Used by FEN setup and by move/log formatting.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{first_square, square_mask};
use crate::game_state::chess_types::{Bitboard, Square};

/// Convert a coordinate name (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a coordinate name to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> ChessResult<Bitboard> {
    Ok(square_mask(algebraic_to_square(square)?))
}

/// Coordinate name of a square index; indexes above 63 wrap into range.
#[inline]
pub fn square_name(square: Square) -> String {
    let square = square % 64;
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    format!("{file_char}{rank_char}")
}

/// Coordinate name of a one-hot bitboard.
pub fn bitboard_to_algebraic(bitboard: Bitboard) -> ChessResult<String> {
    if bitboard.count_ones() != 1 {
        return Err(ChessError::InvalidSquare(format!(
            "bitboard {bitboard:#018x} must contain exactly one set bit"
        )));
    }
    let square = first_square(bitboard)
        .ok_or_else(|| ChessError::InvalidSquare("empty bitboard".to_owned()))?;
    Ok(square_name(square))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_bitboard, algebraic_to_square, bitboard_to_algebraic, square_name};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(63), "h8");
    }

    #[test]
    fn bitboards_use_msb_for_a1() {
        let a1 = algebraic_to_bitboard("a1").expect("a1 should parse");
        assert_eq!(a1, 1u64 << 63);
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(
            bitboard_to_algebraic(e4).expect("one-hot bitboard should convert"),
            "e4"
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(bitboard_to_algebraic(0).is_err());
        assert!(bitboard_to_algebraic(3).is_err());
    }
}
