//! Square-pair geometry used by pin and check resolution.
//!
//! `between(a, b)` is the set of squares strictly between two aligned squares
//! and `line(a, b)` is the full edge-to-edge line through them. Both are empty
//! for squares that share no rank, file or diagonal. The tables are built once
//! on first use.

use std::sync::OnceLock;

use crate::game_state::bitboard::{offset_square, square_mask};
use crate::game_state::chess_types::{Bitboard, Square};

const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

struct GeometryTables {
    between: Vec<[Bitboard; 64]>,
    line: Vec<[Bitboard; 64]>,
}

static TABLES: OnceLock<GeometryTables> = OnceLock::new();

#[inline]
fn tables() -> &'static GeometryTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> GeometryTables {
    let mut between = vec![[0u64; 64]; 64];
    let mut line = vec![[0u64; 64]; 64];

    for from in 0..64u8 {
        for (df, dr) in DIRECTIONS {
            let full_line = ray(from, df, dr) | ray(from, -df, -dr) | square_mask(from);

            let mut gap = 0u64;
            let mut cursor = offset_square(from, df, dr);
            while let Some(to) = cursor {
                between[from as usize][to as usize] = gap;
                line[from as usize][to as usize] = full_line;
                gap |= square_mask(to);
                cursor = offset_square(to, df, dr);
            }
        }
    }

    GeometryTables { between, line }
}

fn ray(from: Square, df: i8, dr: i8) -> Bitboard {
    let mut out = 0u64;
    let mut cursor = offset_square(from, df, dr);
    while let Some(sq) = cursor {
        out |= square_mask(sq);
        cursor = offset_square(sq, df, dr);
    }
    out
}

#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    tables().between[a as usize][b as usize]
}

#[inline]
pub fn line(a: Square, b: Square) -> Bitboard {
    tables().line[a as usize][b as usize]
}

/// True when `a`, `b` and `c` share one rank, file or diagonal.
#[inline]
pub fn aligned(a: Square, b: Square, c: Square) -> bool {
    line(a, b) & square_mask(c) != 0
}

#[cfg(test)]
mod tests {
    use super::{aligned, between, line};
    use crate::game_state::bitboard::square_mask;

    #[test]
    fn between_on_a_file_excludes_endpoints() {
        // a1..a4
        let got = between(0, 24);
        assert_eq!(got, square_mask(8) | square_mask(16));
    }

    #[test]
    fn between_adjacent_or_unaligned_is_empty() {
        assert_eq!(between(0, 1), 0);
        assert_eq!(between(0, 17), 0);
        assert_eq!(line(0, 17), 0);
    }

    #[test]
    fn diagonal_line_spans_the_board() {
        // c1 and e3 lie on the c1-h6 diagonal
        let got = line(2, 20);
        assert_eq!(got.count_ones(), 6);
        assert!(aligned(2, 20, 29));
        assert!(!aligned(2, 20, 16));
    }

    #[test]
    fn tables_are_symmetric() {
        for a in 0..64u8 {
            for b in 0..64u8 {
                assert_eq!(between(a, b), between(b, a));
                assert_eq!(line(a, b), line(b, a));
            }
        }
    }
}
