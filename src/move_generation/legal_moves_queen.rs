use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::chess_move::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    generate_piece_moves(state, side, PieceKind::Queen, out, queen_attacks);
}
