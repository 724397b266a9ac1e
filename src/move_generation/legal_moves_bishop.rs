use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    generate_piece_moves(state, side, PieceKind::Bishop, out, bishop_attacks);
}
