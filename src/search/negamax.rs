//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search mutates the board in place through `make_move`/`unmake_move`
//! pairs, extends horizon nodes with a capture/promotion-only quiescence
//! search, and caches results in a transposition table owned by the engine.

use chrono::{TimeDelta, Utc};
use log::{debug, trace};

use crate::game_state::board::Board;
use crate::game_state::chess_types::GameResult;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, KING_VALUE};
use crate::search::move_ordering::{order_moves, order_tactical_moves};
use crate::search::transposition_table::{NodeType, TTEntry, TranspositionTable};

/// Window bound, strictly above any reachable score.
pub const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub quiescence: bool,
    pub tt_size_log2: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            quiescence: true,
            tt_size_log2: TranspositionTable::DEFAULT_SIZE_LOG2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub tt_probes: u64,
    pub tt_hits: u64,
    pub tt_stores: u64,
    pub beta_cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    /// From the perspective of the side that was to move at the root.
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
    pub elapsed: TimeDelta,
}

impl SearchReport {
    pub fn info_line(&self) -> String {
        format!(
            "info depth {} score cp {} nodes {} qnodes {} time {} pv {}",
            self.depth,
            self.score,
            self.stats.nodes,
            self.stats.quiescence_nodes,
            self.elapsed.num_milliseconds(),
            self.best_move
        )
    }

    /// True when the score is a forced mate for the root side.
    pub fn is_mate(&self) -> bool {
        self.score >= KING_VALUE - i32::from(u8::MAX)
    }
}

#[derive(Debug)]
pub struct SearchEngine<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
    table: TranspositionTable,
    stats: SearchStats,
}

impl SearchEngine<MaterialScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, MaterialScorer)
    }
}

impl Default for SearchEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> SearchEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            scorer,
            table: TranspositionTable::with_size_log2(config.tt_size_log2),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Forget everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.table.clear();
        self.stats = SearchStats::default();
    }

    /// Pick a move for the side to move. `None` when the game is over.
    ///
    /// The board is used as scratch space and is restored before returning.
    pub fn best_move(&mut self, board: &mut Board) -> Option<SearchReport> {
        if board.game_result().is_over() {
            return None;
        }

        let started = Utc::now();
        let table_before = self.table.stats();
        self.stats = SearchStats::default();
        self.stats.nodes += 1;

        let depth = self.config.max_depth.max(1);
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in order_moves(board.legal_moves()) {
            let undo = board.make_move(mv);
            let score = -self.search(board, depth - 1, -beta, -alpha, 1);
            board.unmake_move(undo);

            trace!("root {mv} score {score}");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, score) = best?;
        let table_after = self.table.stats();
        self.stats.tt_probes = table_after.probes - table_before.probes;
        self.stats.tt_hits = table_after.hits - table_before.hits;
        self.stats.tt_stores = table_after.stores - table_before.stores;

        let report = SearchReport {
            best_move,
            score,
            depth,
            stats: self.stats,
            elapsed: Utc::now() - started,
        };
        debug!("{}", report.info_line());
        Some(report)
    }

    fn search(&mut self, board: &mut Board, depth: u8, mut alpha: i32, beta: i32, ply: u8) -> i32 {
        if depth == 0 {
            return self.horizon(board, alpha, beta, ply);
        }

        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, ply) {
            return score;
        }

        let key = board.zobrist_key();
        if let Some(entry) = self.table.probe(key) {
            if entry.depth >= depth {
                match entry.node_type {
                    NodeType::Exact => return entry.score,
                    NodeType::LowerBound if entry.score >= beta => return entry.score,
                    NodeType::UpperBound if entry.score <= alpha => return entry.score,
                    _ => {}
                }
            }
        }

        let original_alpha = alpha;
        let mut best = -INFINITY;

        for mv in order_moves(board.legal_moves()) {
            let undo = board.make_move(mv);
            let score = -self.search(board, depth - 1, -beta, -alpha, ply.saturating_add(1));
            board.unmake_move(undo);

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                self.store(key, best, depth, NodeType::LowerBound);
                return best;
            }
        }

        let node_type = if best <= original_alpha {
            NodeType::UpperBound
        } else {
            NodeType::Exact
        };
        self.store(key, best, depth, node_type);
        best
    }

    fn horizon(&mut self, board: &mut Board, alpha: i32, beta: i32, ply: u8) -> i32 {
        if self.config.quiescence {
            return self.quiescence(board, alpha, beta, ply);
        }

        self.stats.nodes += 1;
        terminal_score(board, ply)
            .unwrap_or_else(|| self.scorer.score(board.state(), board.side_to_move()))
    }

    /// Fail-hard capture/promotion search below the horizon.
    fn quiescence(&mut self, board: &mut Board, mut alpha: i32, beta: i32, ply: u8) -> i32 {
        self.stats.quiescence_nodes += 1;

        if let Some(score) = terminal_score(board, ply) {
            return score;
        }

        let key = board.zobrist_key();
        if let Some(entry) = self.table.probe(key) {
            if matches!(entry.node_type, NodeType::Exact | NodeType::Quiescence) {
                return entry.score.max(alpha).min(beta);
            }
        }

        let stand_pat = self.scorer.score(board.state(), board.side_to_move());
        if stand_pat >= beta {
            return beta;
        }
        let original_alpha = alpha;
        alpha = alpha.max(stand_pat);

        for mv in order_tactical_moves(board.legal_moves()) {
            let undo = board.make_move(mv);
            let score = -self.quiescence(board, -beta, -alpha, ply.saturating_add(1));
            board.unmake_move(undo);

            if score >= beta {
                self.stats.beta_cutoffs += 1;
                return beta;
            }
            alpha = alpha.max(score);
        }

        if alpha > original_alpha && alpha < beta {
            self.store(key, alpha, 0, NodeType::Quiescence);
        }
        alpha
    }

    #[inline]
    fn store(&mut self, key: u64, score: i32, depth: u8, node_type: NodeType) {
        self.table.store(TTEntry {
            key,
            score,
            depth,
            node_type,
        });
    }
}

/// Score of a finished game from the side to move; `None` while ongoing.
fn terminal_score(board: &Board, ply: u8) -> Option<i32> {
    match board.game_result() {
        GameResult::Ongoing => None,
        GameResult::DrawByStalemate | GameResult::DrawByThreefoldRepetition => Some(0),
        GameResult::WhiteWinsByCheckmate | GameResult::BlackWinsByCheckmate => {
            Some(-(KING_VALUE - i32::from(ply)))
        }
    }
}
