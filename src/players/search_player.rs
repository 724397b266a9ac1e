//! Search-driven player.
//!
//! Owns its own search engine and transposition table. The search runs on a
//! scratch copy of the board so the authoritative board is only read.

use chrono::TimeDelta;
use log::info;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;
use crate::players::player_trait::Player;
use crate::search::negamax::{SearchConfig, SearchEngine, SearchReport};

#[derive(Debug)]
pub struct SearchPlayer {
    name: String,
    engine: SearchEngine,
    move_delay: TimeDelta,
    last_report: Option<SearchReport>,
}

impl SearchPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            name: format!("Negamax d{}", config.max_depth),
            engine: SearchEngine::new(config),
            move_delay: TimeDelta::zero(),
            last_report: None,
        }
    }

    /// Pause the presentation layer should insert before showing a move.
    /// The engine itself never waits.
    pub fn with_move_delay(mut self, move_delay: TimeDelta) -> Self {
        self.move_delay = move_delay;
        self
    }

    #[inline]
    pub fn move_delay(&self) -> TimeDelta {
        self.move_delay
    }

    #[inline]
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Default for SearchPlayer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Player for SearchPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_move(&self, board: &Board) -> bool {
        !board.legal_moves().is_empty()
    }

    fn get_move(&mut self, board: &Board) -> ChessResult<Move> {
        let mut scratch = board.clone();
        let report = self
            .engine
            .best_move(&mut scratch)
            .ok_or(ChessError::NoMoveAvailable)?;
        info!("{}: {}", self.name, report.info_line());
        self.last_report = Some(report);
        Ok(report.best_move)
    }

    fn new_game(&mut self) {
        self.engine.new_game();
        self.last_report = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::SearchPlayer;
    use crate::game_state::board::Board;
    use crate::players::player_trait::Player;
    use crate::search::negamax::SearchConfig;

    fn shallow() -> SearchConfig {
        SearchConfig {
            max_depth: 2,
            quiescence: true,
            tt_size_log2: 14,
        }
    }

    #[test]
    fn returns_legal_move_without_touching_board() {
        let board = Board::new();
        let before = board.to_fen();
        let mut player = SearchPlayer::new(shallow());

        let mv = player.get_move(&board).expect("start position has moves");
        assert!(board.is_legal(&mv));
        assert_eq!(board.to_fen(), before);
        assert!(player.last_report().is_some());
    }

    #[test]
    fn move_delay_is_carried() {
        let player = SearchPlayer::new(shallow()).with_move_delay(TimeDelta::milliseconds(250));
        assert_eq!(player.move_delay().num_milliseconds(), 250);
        assert_eq!(player.name(), "Negamax d2");
    }
}
