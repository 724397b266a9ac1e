//! Input-driven player.
//!
//! The presentation layer translates clicks or text into `Move` values and
//! submits them here; the game loop picks them up on the player's turn.

use std::collections::VecDeque;

use log::warn;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;
use crate::players::player_trait::Player;

#[derive(Debug, Clone, Default)]
pub struct HumanPlayer {
    name: String,
    pending: VecDeque<Move>,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending: VecDeque::new(),
        }
    }

    pub fn submit(&mut self, mv: Move) {
        self.pending.push_back(mv);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_move(&self, board: &Board) -> bool {
        self.pending.front().is_some_and(|mv| board.is_legal(mv))
    }

    /// Pops submitted moves until one is legal here; illegal ones are dropped.
    fn get_move(&mut self, board: &Board) -> ChessResult<Move> {
        while let Some(mv) = self.pending.pop_front() {
            if board.is_legal(&mv) {
                return Ok(mv);
            }
            warn!("{}: discarding illegal submitted move {mv}", self.name);
        }
        Err(ChessError::NoMoveAvailable)
    }

    fn new_game(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::HumanPlayer;
    use crate::errors::ChessError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::PieceKind;
    use crate::moves::chess_move::{Move, MoveKind};
    use crate::players::player_trait::Player;

    #[test]
    fn no_move_until_one_is_submitted() {
        let board = Board::new();
        let mut human = HumanPlayer::new("alice");

        assert!(!human.can_move(&board));
        assert_eq!(human.get_move(&board), Err(ChessError::NoMoveAvailable));

        let e4 = Move::new(12, 28, PieceKind::Pawn, None, None, MoveKind::DoublePush);
        human.submit(e4);
        assert!(human.can_move(&board));
        assert_eq!(human.get_move(&board), Ok(e4));
        assert_eq!(human.pending(), 0);
    }

    #[test]
    fn illegal_submissions_are_skipped() {
        let board = Board::new();
        let mut human = HumanPlayer::new("bob");
        let bogus = Move::normal(12, 36, PieceKind::Pawn, None);
        let nf3 = Move::normal(6, 21, PieceKind::Knight, None);

        human.submit(bogus);
        human.submit(nf3);
        assert!(!human.can_move(&board));
        assert_eq!(human.get_move(&board), Ok(nf3));
    }
}
