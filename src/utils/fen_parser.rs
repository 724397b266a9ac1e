//! FEN-to-position parser.
//!
//! Builds a `BitboardState` and side to move from a Forsyth-Edwards Notation
//! string. Only used to set up positions for tests, benches and diagnostics;
//! the clock fields are optional and default to `0 1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::bitboard::square_mask;
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_rules::{A1, A8, H1, H8};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::algebraic::algebraic_to_square;

/// Parsed FEN including the move clocks.
#[derive(Debug, Clone, Copy)]
pub struct FenPosition {
    pub state: BitboardState,
    pub side_to_move: Color,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

pub fn parse_fen(fen: &str) -> ChessResult<(BitboardState, Color)> {
    let position = parse_fen_with_clocks(fen)?;
    Ok((position.state, position.side_to_move))
}

pub fn parse_fen_with_clocks(fen: &str) -> ChessResult<FenPosition> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut state = BitboardState::new_empty();
    parse_board(board_part, &mut state)?;
    state.recalc_occupancy();

    let side_to_move = match side_part {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(invalid(&format!("side to move '{side_part}'"))),
    };

    state.castle_rights = parse_castle_rights(castling_part)?;
    state.en_passant = if en_passant_part == "-" {
        0
    } else {
        square_mask(algebraic_to_square(en_passant_part)?)
    };

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;

    Ok(FenPosition {
        state,
        side_to_move,
        halfmove_clock,
        fullmove_number,
    })
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidFen(msg.to_owned())
}

fn parse_board(board_part: &str, state: &mut BitboardState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            state.add_piece(color, piece, board_rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_castle_rights(castling_part: &str) -> ChessResult<u64> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0u64, |rights, ch| {
        let corner = match ch {
            'K' => H1,
            'Q' => A1,
            'k' => H8,
            'q' => A8,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        };
        Ok(rights | square_mask(corner))
    })
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
