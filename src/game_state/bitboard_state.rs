//! Bitboard position representation.
//!
//! `BitboardState` is pure data plus small mutators: twelve piece masks,
//! per-color aggregates, combined occupancy and the auxiliary masks used by
//! move generation (en passant target, castle rights, attacked squares and
//! pinned squares). It is `Copy` so the search can snapshot it around a trial
//! move instead of reversing every bit change.

use crate::game_state::bitboard::{first_square, square_mask, squares};
use crate::game_state::chess_rules::{A1, A8, H1, H8};
use crate::game_state::chess_types::{Bitboard, Color, PieceKind, Square};

/// Castle rights mask with every rook home square still eligible.
pub const CASTLE_ALL: Bitboard =
    square_mask(A1) | square_mask(H1) | square_mask(A8) | square_mask(H8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitboardState {
    /// `[color][piece_kind]`
    pub pieces: [[Bitboard; 6]; 2],
    pub occupancy_by_color: [Bitboard; 2],
    pub occupancy_all: Bitboard,

    /// Square skipped by the last double pawn push; at most one bit.
    pub en_passant: Bitboard,
    /// Rook home squares whose castle is still available.
    pub castle_rights: Bitboard,

    /// Indexed by the defending side: squares its opponent attacks, computed
    /// with the defending king removed from the board.
    pub attacked_squares: [Bitboard; 2],
    /// Indexed by owner: squares of pieces pinned against their own king.
    pub pinned_squares: [Bitboard; 2],
}

/// Canonical position identity used by the repetition log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub pieces: [[Bitboard; 6]; 2],
    pub side_to_move: Color,
    pub castle_rights: Bitboard,
    pub en_passant: Bitboard,
}

impl BitboardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position with all castle rights.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut state = Self::new_empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as Square;
            state.add_piece(Color::White, *piece, file);
            state.add_piece(Color::White, PieceKind::Pawn, 8 + file);
            state.add_piece(Color::Black, PieceKind::Pawn, 48 + file);
            state.add_piece(Color::Black, *piece, 56 + file);
        }
        state.castle_rights = CASTLE_ALL;
        state.recalc_occupancy();
        state
    }

    #[inline]
    pub fn piece_mask(&self, color: Color, piece: PieceKind) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    pub fn color_mask(&self, color: Color) -> Bitboard {
        self.occupancy_by_color[color.index()]
    }

    /// Piece of `color` standing on `square`, if any.
    pub fn piece_of(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_mask(square);
        if self.occupancy_by_color[color.index()] & mask == 0 {
            return None;
        }
        PieceKind::ALL
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()] & mask != 0)
    }

    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        Color::ALL
            .into_iter()
            .find_map(|color| self.piece_of(color, square).map(|piece| (color, piece)))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        first_square(self.pieces[color.index()][PieceKind::King.index()])
    }

    /// Set a piece bit and its color aggregate. Combined occupancy is left for
    /// `recalc_occupancy`.
    #[inline]
    pub fn add_piece(&mut self, color: Color, piece: PieceKind, square: Square) {
        let mask = square_mask(square);
        self.pieces[color.index()][piece.index()] |= mask;
        self.occupancy_by_color[color.index()] |= mask;
    }

    #[inline]
    pub fn remove_piece(&mut self, color: Color, piece: PieceKind, square: Square) {
        let mask = !square_mask(square);
        self.pieces[color.index()][piece.index()] &= mask;
        self.occupancy_by_color[color.index()] &= mask;
    }

    pub fn recalc_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }

    pub fn fingerprint(&self, side_to_move: Color) -> Fingerprint {
        Fingerprint {
            pieces: self.pieces,
            side_to_move,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
        }
    }

    /// Aggregates match piece masks, no square holds two pieces, and the en
    /// passant mask has at most one bit.
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0u64;
        for color in Color::ALL {
            let mut union = 0u64;
            for piece in PieceKind::ALL {
                let bb = self.pieces[color.index()][piece.index()];
                if seen & bb != 0 {
                    return false;
                }
                seen |= bb;
                union |= bb;
            }
            if union != self.occupancy_by_color[color.index()] {
                return false;
            }
        }
        seen == self.occupancy_all && self.en_passant.count_ones() <= 1
    }

    /// Material count of one piece kind for one side.
    #[inline]
    pub fn count(&self, color: Color, piece: PieceKind) -> u32 {
        self.pieces[color.index()][piece.index()].count_ones()
    }

    /// Every `(color, piece, square)` on the board, in a1..h8 order per mask.
    pub fn placements(&self) -> impl Iterator<Item = (Color, PieceKind, Square)> + '_ {
        Color::ALL.into_iter().flat_map(move |color| {
            PieceKind::ALL.into_iter().flat_map(move |piece| {
                squares(self.pieces[color.index()][piece.index()])
                    .map(move |square| (color, piece, square))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{BitboardState, CASTLE_ALL};
    use crate::game_state::bitboard::{RANK_1, RANK_2};
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn starting_position_is_consistent() {
        let state = BitboardState::starting_position();
        assert!(state.is_consistent());
        assert_eq!(state.occupancy_all.count_ones(), 32);
        assert_eq!(state.color_mask(Color::White), RANK_1 | RANK_2);
        assert_eq!(state.castle_rights, CASTLE_ALL);
        assert_eq!(state.en_passant, 0);
    }

    #[test]
    fn piece_lookup_by_square() {
        let state = BitboardState::starting_position();
        assert_eq!(state.piece_at(4), Some((Color::White, PieceKind::King)));
        assert_eq!(state.piece_at(59), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(state.piece_at(28), None);
        assert_eq!(state.king_square(Color::Black), Some(60));
        assert_eq!(state.placements().count(), 32);
    }

    #[test]
    fn add_and_remove_keep_aggregates_in_sync() {
        let mut state = BitboardState::new_empty();
        state.add_piece(Color::White, PieceKind::Knight, 27);
        state.recalc_occupancy();
        assert!(state.is_consistent());
        state.remove_piece(Color::White, PieceKind::Knight, 27);
        state.recalc_occupancy();
        assert!(state.is_consistent());
        assert_eq!(state.occupancy_all, 0);
    }

    #[test]
    fn fingerprint_depends_on_side_to_move() {
        let state = BitboardState::starting_position();
        assert_ne!(state.fingerprint(Color::White), state.fingerprint(Color::Black));
        assert_eq!(state.fingerprint(Color::White), state.fingerprint(Color::White));
    }
}
