//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Direct-mapped: slot = `hash % capacity`, and every store overwrites its
//! slot (last write wins). A probe only confirms that the stored hash equals
//! the requested one, so two positions sharing a full 64-bit hash are
//! indistinguishable. That collision risk is accepted.

use log::debug;

/// Meaning of a stored score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Exact,
    /// Real score is at least this (the node failed high).
    LowerBound,
    /// Real score is at most this (no move raised alpha).
    UpperBound,
    /// Produced by quiescence search; only reused by quiescence probes.
    Quiescence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub score: i32,
    pub depth: u8,
    pub node_type: NodeType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    stats: TTStats,
}

impl TranspositionTable {
    pub const DEFAULT_SIZE_LOG2: u8 = 20;

    /// Table with `2^size_log2` slots. Sizes above 2^30 are clamped.
    pub fn with_size_log2(size_log2: u8) -> Self {
        let capacity = 1usize << size_log2.min(30);
        debug!("allocating transposition table with {capacity} slots");
        Self {
            entries: vec![None; capacity],
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Occupied slots; walks the whole table.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Presence hint: the slot for `key` holds an entry with the same hash.
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.entries[self.idx(key)].is_some_and(|e| e.key == key)
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries[self.idx(key)].filter(|e| e.key == key);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;
        let idx = self.idx(entry.key);
        self.entries[idx] = Some(entry);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::with_size_log2(Self::DEFAULT_SIZE_LOG2)
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeType, TTEntry, TranspositionTable};

    fn entry(key: u64, depth: u8, score: i32, node_type: NodeType) -> TTEntry {
        TTEntry {
            key,
            score,
            depth,
            node_type,
        }
    }

    #[test]
    fn default_table_has_two_to_the_twentieth_slots() {
        assert_eq!(TranspositionTable::default().capacity(), 1 << 20);
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::with_size_log2(4);
        let stored = entry(123, 5, 42, NodeType::Exact);
        tt.store(stored);

        assert!(tt.contains(123));
        assert_eq!(tt.probe(123), Some(stored));
        assert_eq!(tt.stats().hits, 1);
    }

    #[test]
    fn colliding_slot_is_overwritten_last_write_wins() {
        let mut tt = TranspositionTable::with_size_log2(4);
        tt.store(entry(3, 9, 1, NodeType::Exact));
        tt.store(entry(3 + 16, 1, 7, NodeType::UpperBound));

        assert!(!tt.contains(3));
        assert_eq!(tt.probe(3), None);
        assert_eq!(tt.probe(19).map(|e| e.score), Some(7));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn shallower_entry_replaces_deeper_for_same_key() {
        let mut tt = TranspositionTable::with_size_log2(4);
        tt.store(entry(5, 6, 100, NodeType::Exact));
        tt.store(entry(5, 1, -3, NodeType::Quiescence));

        let got = tt.probe(5).expect("entry should exist");
        assert_eq!(got.depth, 1);
        assert_eq!(got.node_type, NodeType::Quiescence);
    }

    #[test]
    fn clear_empties_table_and_stats() {
        let mut tt = TranspositionTable::with_size_log2(4);
        tt.store(entry(1, 1, 1, NodeType::LowerBound));
        tt.clear();

        assert!(tt.is_empty());
        assert_eq!(tt.stats().stores, 0);
    }
}
