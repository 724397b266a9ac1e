//! Game loop owning the authoritative board.
//!
//! Players are asked for a move on their turn and only ever see a shared
//! borrow of the board; the loop applies the returned move.

use log::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameResult};
use crate::moves::chess_move::Move;
use crate::players::player_trait::Player;

pub struct Game {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    history: Vec<Move>,
}

impl Game {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::from_board(Board::new(), white, black)
    }

    pub fn from_board(board: Board, mut white: Box<dyn Player>, mut black: Box<dyn Player>) -> Self {
        white.new_game();
        black.new_game();
        Self {
            board,
            white,
            black,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.board.game_result()
    }

    fn player(&self, color: Color) -> &dyn Player {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut dyn Player {
        seat_mut(&mut self.white, &mut self.black, color)
    }

    /// Whether the side to move has a move ready.
    pub fn side_to_move_ready(&self) -> bool {
        self.player(self.board.side_to_move()).can_move(&self.board)
    }

    /// Ask the side to move for one move and apply it.
    pub fn step(&mut self) -> ChessResult<Move> {
        let result = self.board.game_result();
        if result.is_over() {
            return Err(ChessError::GameOver(result));
        }

        let side = self.board.side_to_move();
        if !self.player(side).can_move(&self.board) {
            return Err(ChessError::NoMoveAvailable);
        }
        let player = seat_mut(&mut self.white, &mut self.black, side);
        let mv = player.get_move(&self.board)?;
        debug!("{} ({side:?}) chose {mv}", player.name());

        self.board.apply_move(mv)?;
        self.history.push(mv);
        Ok(mv)
    }

    /// Step until the game is decided or `max_plies` moves have been played.
    /// A player without a move stops the loop early.
    pub fn play(&mut self, max_plies: usize) -> ChessResult<GameResult> {
        for _ in 0..max_plies {
            match self.step() {
                Ok(_) => {}
                Err(ChessError::GameOver(result)) => return Ok(result),
                Err(ChessError::NoMoveAvailable) => break,
                Err(err) => return Err(err),
            }
        }

        let result = self.result();
        info!(
            "game stopped after {} plies: {result:?} ({})",
            self.history.len(),
            self.board.to_fen()
        );
        Ok(result)
    }

    /// Reset to the initial position and notify both players.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        for color in Color::ALL {
            self.player_mut(color).new_game();
        }
    }
}

/// Field-level form of `Game::player_mut`, so `step` can hold the board borrow.
fn seat_mut<'a>(
    white: &'a mut Box<dyn Player>,
    black: &'a mut Box<dyn Player>,
    color: Color,
) -> &'a mut dyn Player {
    match color {
        Color::White => white.as_mut(),
        Color::Black => black.as_mut(),
    }
}
