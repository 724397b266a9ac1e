//! Player abstraction used by the game loop.
//!
//! A player only reads the authoritative board. It answers whether it has a
//! move ready and, if so, returns one drawn from `Board::legal_moves()`; the
//! game loop performs the actual apply.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;

pub trait Player {
    fn name(&self) -> &str;

    /// Whether `get_move` would currently produce a move.
    fn can_move(&self, board: &Board) -> bool;

    fn get_move(&mut self, board: &Board) -> ChessResult<Move>;

    fn new_game(&mut self) {}
}
