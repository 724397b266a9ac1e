//! Immutable move descriptor.
//!
//! A `Move` records everything needed to apply it to a `BitboardState`
//! without looking at the board again: origin, destination, the moved piece,
//! the captured piece, the promotion piece and a special-move tag. Moves are
//! totally ordered by that field tuple so they can live in a `BTreeSet` and be
//! selected by index deterministically.

use std::cmp::Ordering;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

/// Special-move tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveKind {
    Normal,
    DoublePush,
    EnPassant,
    KingSideCastle,
    QueenSideCastle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub kind: MoveKind,
}

type MoveKey = (
    Square,
    Square,
    PieceKind,
    Option<PieceKind>,
    Option<PieceKind>,
    MoveKind,
);

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: PieceKind,
        captured: Option<PieceKind>,
        promotion: Option<PieceKind>,
        kind: MoveKind,
    ) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            promotion,
            kind,
        }
    }

    /// Plain move or capture with no special handling.
    #[inline]
    pub const fn normal(
        from: Square,
        to: Square,
        piece: PieceKind,
        captured: Option<PieceKind>,
    ) -> Self {
        Self::new(from, to, piece, captured, None, MoveKind::Normal)
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::KingSideCastle | MoveKind::QueenSideCastle
        )
    }

    /// Captures and promotions; the move set quiescence search explores.
    #[inline]
    pub const fn is_tactical(&self) -> bool {
        self.is_capture() || self.is_promotion()
    }

    #[inline]
    fn key(&self) -> MoveKey {
        (
            self.from,
            self.to,
            self.piece,
            self.captured,
            self.promotion,
            self.kind,
        )
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Coordinate form (`e2e4`, `e7e8q`), for logs and diagnostics.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{Move, MoveKind};
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn ordering_follows_field_tuple() {
        let a = Move::normal(12, 20, PieceKind::Pawn, None);
        let b = Move::new(12, 28, PieceKind::Pawn, None, None, MoveKind::DoublePush);
        let c = Move::normal(1, 18, PieceKind::Knight, None);
        assert!(c < a);
        assert!(a < b);
    }

    #[test]
    fn promotions_to_same_square_are_distinct_set_members() {
        let set: BTreeSet<Move> = PieceKind::PROMOTIONS
            .iter()
            .map(|&p| Move::new(52, 60, PieceKind::Pawn, None, Some(p), MoveKind::Normal))
            .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn display_uses_coordinates() {
        let mv = Move::new(52, 60, PieceKind::Pawn, None, Some(PieceKind::Queen), MoveKind::Normal);
        assert_eq!(mv.to_string(), "e7e8q");
        assert_eq!(Move::normal(6, 21, PieceKind::Knight, None).to_string(), "g1f3");
    }

    #[test]
    fn tactical_moves_are_captures_or_promotions() {
        assert!(Move::normal(28, 35, PieceKind::Pawn, Some(PieceKind::Pawn)).is_tactical());
        assert!(!Move::normal(6, 21, PieceKind::Knight, None).is_tactical());
        assert!(Move::new(4, 6, PieceKind::King, None, None, MoveKind::KingSideCastle).is_castle());
    }
}
