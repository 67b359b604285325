//! Transposition cache for evaluated positions.
//!
//! Positions are keyed by a two-word occupancy fingerprint and map to
//! the static score the evaluator computed for them. The cache is
//! bounded: once it reaches capacity, each insert evicts the oldest
//! entry in insertion order, so long games shed opening-era positions
//! first while the precomputed book fits untouched below the bound.
//!
//! Scores are static positional values for a fixed agent side, so the
//! fingerprint carries no side-to-move component.

use std::collections::{HashMap, VecDeque};

use crate::board::{Board, Side};

/// Cache key: the agent side's disc set plus the full occupancy set.
///
/// Two boards collide only if the agent's discs and the occupied
/// squares both match, which pins every disc of both colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fingerprint {
    own: u64,
    occupied: u64,
}

impl Fingerprint {
    /// Fingerprint of a position from the agent side's point of view
    #[inline]
    #[must_use]
    pub fn of(board: &Board, side: Side) -> Self {
        Fingerprint {
            own: board.discs(side).0,
            occupied: board.occupied().0,
        }
    }
}

/// Bounded score cache with insertion-order (FIFO) eviction.
pub struct TranspositionCache {
    entries: HashMap<Fingerprint, i32>,
    order: VecDeque<Fingerprint>,
    capacity: usize,
}

impl TranspositionCache {
    /// Create an empty cache that holds at most `capacity` entries
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        TranspositionCache {
            entries: HashMap::with_capacity(capacity.min(1 << 17)),
            order: VecDeque::new(),
            capacity,
        }
    }

    /// Look up the cached score for a fingerprint. Never reorders.
    #[inline]
    #[must_use]
    pub fn get(&self, key: Fingerprint) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Insert a score, evicting the oldest entry if the cache is full.
    ///
    /// Re-inserting a fingerprint that is already present is a no-op:
    /// the stored score and its insertion rank are both kept. Callers
    /// look up before scoring, so a present key never needs a rewrite.
    pub fn put(&mut self, key: Fingerprint, score: i32) {
        if self.entries.contains_key(&key) {
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, score);
        self.order.push_back(key);
    }

    /// Number of cached positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries the cache will hold
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry, keeping the capacity
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn fp(board: &Board) -> Fingerprint {
        Fingerprint::of(board, Side::Black)
    }

    fn distinct_fingerprints(n: usize) -> Vec<Fingerprint> {
        // Walk a first-legal-move game; occupancy only grows, so every
        // position along the way fingerprints differently.
        let mut board = Board::new();
        let mut to_move = Side::Black;
        let mut seen = vec![fp(&board)];
        while seen.len() < n {
            match board.legal_moves(to_move).first() {
                Some(&mv) => {
                    board.apply_move(mv, to_move);
                    to_move = to_move.opponent();
                    seen.push(fp(&board));
                }
                None => {
                    to_move = to_move.opponent();
                    assert!(
                        board.has_legal_move(to_move),
                        "game ended before {n} positions were collected"
                    );
                }
            }
        }
        seen
    }

    #[test]
    fn test_store_and_get() {
        let mut cache = TranspositionCache::new(100);
        let key = fp(&Board::new());

        assert_eq!(cache.get(key), None);
        cache.put(key, 42);
        assert_eq!(cache.get(key), Some(42));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_is_noop() {
        let mut cache = TranspositionCache::new(100);
        let key = fp(&Board::new());

        cache.put(key, 7);
        cache.put(key, 99);
        assert_eq!(cache.get(key), Some(7));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let keys = distinct_fingerprints(4);
        let mut cache = TranspositionCache::new(3);

        for (i, &key) in keys.iter().take(3).enumerate() {
            cache.put(key, i as i32);
        }
        assert_eq!(cache.len(), 3);

        // Fourth insert evicts the first-inserted key only.
        cache.put(keys[3], 3);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(keys[0]), None);
        assert_eq!(cache.get(keys[1]), Some(1));
        assert_eq!(cache.get(keys[2]), Some(2));
        assert_eq!(cache.get(keys[3]), Some(3));
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let keys = distinct_fingerprints(20);
        let mut cache = TranspositionCache::new(5);

        for (i, &key) in keys.iter().enumerate() {
            cache.put(key, i as i32);
            assert!(cache.len() <= 5);
        }
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn test_lookup_does_not_affect_eviction_order() {
        let keys = distinct_fingerprints(3);
        let mut cache = TranspositionCache::new(2);

        cache.put(keys[0], 0);
        cache.put(keys[1], 1);
        // Touch the oldest entry; FIFO order must not change.
        assert_eq!(cache.get(keys[0]), Some(0));
        cache.put(keys[2], 2);

        assert_eq!(cache.get(keys[0]), None);
        assert_eq!(cache.get(keys[1]), Some(1));
        assert_eq!(cache.get(keys[2]), Some(2));
    }

    #[test]
    fn test_clear() {
        let mut cache = TranspositionCache::new(10);
        cache.put(fp(&Board::new()), 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 10);
    }

    #[test]
    fn test_fingerprint_distinguishes_colors() {
        // Same occupancy, different ownership of e4/d5.
        let a = Board::from_grid(
            "--------\
             --------\
             --------\
             ---wb---\
             ---bw---\
             --------\
             --------\
             --------",
        )
        .unwrap();
        let b = Board::from_grid(
            "--------\
             --------\
             --------\
             ---ww---\
             ---bb---\
             --------\
             --------\
             --------",
        )
        .unwrap();

        assert_ne!(
            Fingerprint::of(&a, Side::Black),
            Fingerprint::of(&b, Side::Black)
        );
    }

    #[test]
    fn test_fingerprint_same_for_equal_boards() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.apply_move(Move::from_coords(2, 3).unwrap(), Side::Black);
        b.apply_move(Move::from_coords(2, 3).unwrap(), Side::Black);

        assert_eq!(
            Fingerprint::of(&a, Side::White),
            Fingerprint::of(&b, Side::White)
        );
    }
}
