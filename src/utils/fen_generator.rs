use crate::game_state::bitboard::{square_mask, squares};
use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_rules::{A1, A8, H1, H8};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::utils::algebraic::square_name;

pub fn generate_fen(
    state: &BitboardState,
    side_to_move: Color,
    halfmove_clock: u16,
    fullmove_number: u16,
) -> String {
    let board = generate_board_field(state);
    let side_to_move = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(state.castle_rights);
    let en_passant = generate_en_passant_field(state.en_passant);

    format!("{board} {side_to_move} {castling} {en_passant} {halfmove_clock} {fullmove_number}")
}

fn generate_board_field(state: &BitboardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let sq: Square = rank * 8 + file;
            if let Some((color, piece)) = state.piece_at(sq) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(color, piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    match color {
        Color::White => piece.letter().to_ascii_uppercase(),
        Color::Black => piece.letter(),
    }
}

fn generate_castling_field(rights: u64) -> String {
    let out: String = [(H1, 'K'), (A1, 'Q'), (H8, 'k'), (A8, 'q')]
        .into_iter()
        .filter(|(sq, _)| rights & square_mask(*sq) != 0)
        .map(|(_, ch)| ch)
        .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

fn generate_en_passant_field(en_passant: u64) -> String {
    squares(en_passant)
        .next()
        .map(square_name)
        .unwrap_or_else(|| "-".to_owned())
}
