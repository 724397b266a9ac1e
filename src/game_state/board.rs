//! Authoritative board controller.
//!
//! `Board` owns the bitboard position together with everything derived from
//! it: side to move, half-move counter, the current legal move set, the
//! repetition log and the Zobrist key. The legal set is recomputed after
//! every mutation so it is never stale.
//!
//! Two mutation paths exist. `apply_move` is the checked public path used by
//! players and the game loop. `make_move`/`unmake_move` is the search path: it
//! trusts the caller and hands back an `Undo` snapshot that restores the
//! previous position exactly, including the repetition log entry.

use std::collections::{BTreeSet, HashMap};
use std::mem;

use log::{debug, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::bitboard_state::{BitboardState, Fingerprint};
use crate::game_state::chess_rules::REPETITION_LIMIT;
use crate::game_state::chess_types::{Color, GameResult, PieceKind, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, refresh_threats};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen_with_clocks;

/// Everything a single move can change, captured before the move is made.
#[derive(Debug)]
pub struct Undo {
    state: BitboardState,
    side_to_move: Color,
    move_counter: u32,
    zobrist_key: u64,
    repetition: bool,
    fingerprint: Fingerprint,
    legal_moves: BTreeSet<Move>,
}

#[derive(Debug, Clone)]
pub struct Board {
    state: BitboardState,
    side_to_move: Color,
    /// Half-moves played since the game start.
    move_counter: u32,
    legal_moves: BTreeSet<Move>,
    state_log: HashMap<Fingerprint, u8>,
    repetition: bool,
    zobrist_key: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        Self::from_state(BitboardState::starting_position(), Color::White, 0)
    }

    /// Diagnostic setup from FEN. The half-move counter is derived from the
    /// fullmove number; the halfmove clock is ignored.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let position = parse_fen_with_clocks(fen)?;
        let played = u32::from(position.fullmove_number.saturating_sub(1)) * 2
            + u32::from(position.side_to_move == Color::Black);
        Ok(Self::from_state(position.state, position.side_to_move, played))
    }

    /// Build a board around an arbitrary position. The position counts as its
    /// own first occurrence in the repetition log.
    pub fn from_state(state: BitboardState, side_to_move: Color, move_counter: u32) -> Self {
        let mut board = Self {
            state,
            side_to_move,
            move_counter,
            legal_moves: BTreeSet::new(),
            state_log: HashMap::new(),
            repetition: false,
            zobrist_key: compute_zobrist_key(&state, side_to_move),
        };
        board.state_log.insert(state.fingerprint(side_to_move), 1);
        board.refresh_legal_moves();
        board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Read-only view of the legal moves for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> &BTreeSet<Move> {
        &self.legal_moves
    }

    #[inline]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    #[inline]
    pub fn state(&self) -> &BitboardState {
        &self.state
    }

    #[inline]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        self.state.fingerprint(self.side_to_move)
    }

    /// Occurrences of the current position so far, this one included.
    pub fn repetition_count(&self) -> u8 {
        self.state_log
            .get(&self.fingerprint())
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.state, self.side_to_move)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.state.piece_at(square)
    }

    pub fn to_fen(&self) -> String {
        let fullmove = u16::try_from(self.move_counter / 2 + 1).unwrap_or(u16::MAX);
        generate_fen(&self.state, self.side_to_move, 0, fullmove)
    }

    pub fn game_result(&self) -> GameResult {
        if self.repetition {
            return GameResult::DrawByThreefoldRepetition;
        }
        if !self.legal_moves.is_empty() {
            return GameResult::Ongoing;
        }
        if self.is_in_check() {
            GameResult::checkmate_for(self.side_to_move.opposite())
        } else {
            GameResult::DrawByStalemate
        }
    }

    /// Checked move application for players and the game loop.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        let result = self.game_result();
        if result.is_over() {
            warn!("rejected {mv}: game already over ({result:?})");
            return Err(ChessError::GameOver(result));
        }
        if !self.legal_moves.contains(&mv) {
            warn!("rejected illegal move {mv} for {:?}", self.side_to_move);
            return Err(ChessError::IllegalMove(mv));
        }

        let mover = self.side_to_move;
        self.advance(mv);
        debug!(
            "{mover:?} played {mv} (ply {}, {} replies, repetition {})",
            self.move_counter,
            self.legal_moves.len(),
            self.repetition_count()
        );
        Ok(())
    }

    /// Unchecked make for the search; `mv` must come from `legal_moves()`.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        debug_assert!(self.legal_moves.contains(&mv), "make_move with illegal {mv}");

        let state = self.state;
        let side_to_move = self.side_to_move;
        let move_counter = self.move_counter;
        let zobrist_key = self.zobrist_key;
        let repetition = self.repetition;
        let legal_moves = mem::take(&mut self.legal_moves);

        let fingerprint = self.advance(mv);

        Undo {
            state,
            side_to_move,
            move_counter,
            zobrist_key,
            repetition,
            fingerprint,
            legal_moves,
        }
    }

    /// Restore the position saved by the matching `make_move`.
    pub fn unmake_move(&mut self, undo: Undo) {
        if let Some(count) = self.state_log.get_mut(&undo.fingerprint) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.state_log.remove(&undo.fingerprint);
            }
        }

        self.state = undo.state;
        self.side_to_move = undo.side_to_move;
        self.move_counter = undo.move_counter;
        self.zobrist_key = undo.zobrist_key;
        self.repetition = undo.repetition;
        self.legal_moves = undo.legal_moves;
    }

    fn advance(&mut self, mv: Move) -> Fingerprint {
        apply_move(&mut self.state, self.side_to_move, mv);
        self.side_to_move = self.side_to_move.opposite();
        self.move_counter += 1;
        self.zobrist_key = compute_zobrist_key(&self.state, self.side_to_move);

        let fingerprint = self.state.fingerprint(self.side_to_move);
        let count = self.state_log.entry(fingerprint).or_insert(0);
        *count = count.saturating_add(1);
        if *count >= REPETITION_LIMIT {
            self.repetition = true;
        }

        self.refresh_legal_moves();
        fingerprint
    }

    /// Recompute the legal set, plus the waiting side's attacked and pinned
    /// masks so the whole state is a function of the position.
    fn refresh_legal_moves(&mut self) {
        refresh_threats(&mut self.state, self.side_to_move.opposite());
        let moves = generate_legal_moves(&mut self.state, self.side_to_move);
        self.legal_moves = if self.repetition { BTreeSet::new() } else { moves };
    }

    /// Convenience lookup of a legal move by coordinates (and promotion piece).
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        self.legal_moves
            .iter()
            .copied()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
    }
}

impl std::str::FromStr for Board {
    type Err = ChessError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}
