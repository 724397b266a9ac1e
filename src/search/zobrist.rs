//! Zobrist hashing for transposition table addressing.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging. Repetition tracking does
//! not rely on these keys; it compares full position fingerprints.

use std::sync::OnceLock;

use crate::game_state::bitboard::{file_of, square_mask, squares};
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_rules::{A1, A8, H1, H8};
use crate::game_state::chess_types::{Color, PieceKind, Square};

const CASTLE_CORNERS: [Square; 4] = [A1, H1, A8, H8];

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castle_corner: [u64; 4],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castle_corner = [0u64; 4];
    for key in &mut castle_corner {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castle_corner,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
pub fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][piece.index()][square as usize]
}

/// XOR of the corner keys whose rook-home bit is still present in `castle_rights`.
pub fn castle_rights_key(castle_rights: u64) -> u64 {
    CASTLE_CORNERS
        .iter()
        .zip(tables().castle_corner.iter())
        .filter(|(sq, _)| castle_rights & square_mask(**sq) != 0)
        .fold(0, |acc, (_, key)| acc ^ key)
}

#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[file as usize]
}

/// Side-to-move toggle key, mixed in when Black is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Full position key for `state` with `side` to move.
pub fn compute_zobrist_key(state: &BitboardState, side: Color) -> u64 {
    let mut key = state
        .placements()
        .fold(0u64, |acc, (color, piece, sq)| acc ^ piece_square_key(color, piece, sq));

    if side == Color::Black {
        key ^= side_to_move_key();
    }

    key ^= castle_rights_key(state.castle_rights);

    if let Some(ep_square) = squares(state.en_passant).next() {
        key ^= en_passant_file_key(file_of(ep_square));
    }

    key
}
