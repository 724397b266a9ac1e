//! Uniform random mover, mostly for simulations and smoke tests.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;
use crate::players::player_trait::Player;

#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn can_move(&self, board: &Board) -> bool {
        !board.legal_moves().is_empty()
    }

    fn get_move(&mut self, board: &Board) -> ChessResult<Move> {
        board
            .legal_moves()
            .iter()
            .copied()
            .choose(&mut self.rng)
            .ok_or(ChessError::NoMoveAvailable)
    }
}
