use crate::game_state::bitboard_state::BitboardState;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(state: &BitboardState, side: Color, out: &mut Vec<Move>) {
    generate_piece_moves(state, side, PieceKind::Knight, out, |from, _| knight_attacks(from));
}
