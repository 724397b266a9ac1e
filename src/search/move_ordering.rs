//! Search move ordering.
//!
//! Captures and promotions go first, most valuable victim (plus promotion
//! gain) leading; quiet moves follow in their set order. Ordering only
//! affects pruning efficiency, never the search result.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::moves::chess_move::Move;
use crate::search::board_scoring::MaterialScorer;

/// Tactical weight of a move; zero for quiet moves.
#[inline]
pub fn tactical_value(mv: &Move) -> i32 {
    let victim = mv.captured.map_or(0, MaterialScorer::piece_value);
    let promotion = mv.promotion.map_or(0, MaterialScorer::piece_value);
    victim + promotion
}

pub fn order_moves(moves: &BTreeSet<Move>) -> Vec<Move> {
    let mut ordered: Vec<Move> = moves.iter().copied().collect();
    ordered.sort_by_key(|mv| Reverse(tactical_value(mv)));
    ordered
}

/// Tactical moves only, ordered as in `order_moves`. Used by quiescence.
pub fn order_tactical_moves(moves: &BTreeSet<Move>) -> Vec<Move> {
    let mut ordered: Vec<Move> = moves.iter().copied().filter(Move::is_tactical).collect();
    ordered.sort_by_key(|mv| Reverse(tactical_value(mv)));
    ordered
}
