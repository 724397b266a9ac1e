//! Errors surfaced by the public board and player operations.
//!
//! Applying a move outside the legal set is a caller contract violation; it
//! is reported as `IllegalMove` rather than corrupting the board. Running out
//! of legal moves is never an error, it is a terminal `GameResult`.

use thiserror::Error;

use crate::game_state::chess_types::GameResult;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("illegal move {0} for the current position")]
    IllegalMove(Move),
    #[error("game is already over: {0:?}")]
    GameOver(GameResult),
    #[error("player has no move available")]
    NoMoveAvailable,
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
