//! Least Recently Used (LRU) Segment
//!
//! The unsynchronised core of the cache: a key table mapping each resident key
//! to a node handle, plus a recency list of `(key, value)` pairs. The
//! thread-safe [`LruCache`](crate::LruCache) wraps exactly one segment in a
//! lock; all eviction logic lives here.
//!
//! # Algorithm
//!
//! ```text
//!   table: key ──▶ Index
//!                    │
//!                    ▼
//!   head ─▶ [k3,v3] ⇄ [k1,v1] ⇄ [k2,v2] ◀─ tail
//!           (most recent)        (next eviction)
//! ```
//!
//! - A hit unlinks the node and relinks it at the head.
//! - An insert into a full segment pops the tail, removes its key from the
//!   table, then links the new node at the head.
//!
//! # Performance Characteristics
//!
//! - Get / Put / Remove: O(1)
//! - Clear: O(n) to drop entries, one step from the caller's point of view
//!
//! # Thread Safety
//!
//! `LruSegment` is not synchronised. Every method that touches recency takes
//! `&mut self`, so even lookups need exclusive access.

extern crate alloc;

use crate::list::{Index, List};
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LRU segment containing the actual cache algorithm.
///
/// Invariants after every method returns:
/// - `map.len() == list.len() <= cap`
/// - every key in `map` names a linked node whose stored key equals it
/// - list order is recency order, head first
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    cap: NonZeroUsize,
    list: List<(K, V)>,
    map: HashMap<K, Index, S>,
}

impl<K, V, S> LruSegment<K, V, S> {
    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let map_capacity = cap.get().next_power_of_two();
        LruSegment {
            cap,
            list: List::with_capacity(cap.get()),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
        }
    }

    /// Looks up `key` and promotes it to most recently used.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        self.list.move_to_front(node);
        self.list.get(node).map(|(_, v)| v)
    }

    /// Looks up `key` without changing recency order.
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        self.list.get(node).map(|(_, v)| v)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Inserts `key` at the head of the recency list.
    ///
    /// Returns the displaced pair: the previous `(key, value)` if `key` was
    /// already resident, or the evicted tail entry if the segment was full.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if let Some(&node) = self.map.get(&key) {
            self.list.move_to_front(node);
            let slot = self.list.get_mut(node)?;
            let old = core::mem::replace(slot, (key, value));
            return Some(old);
        }

        let mut evicted = None;
        if self.map.len() >= self.cap.get() {
            if let Some((old_key, old_value)) = self.list.pop_back() {
                self.map.remove(&old_key);
                evicted = Some((old_key, old_value));
            }
        }

        let node = self.list.push_front((key.clone(), value));
        self.map.insert(key, node);
        evicted
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        self.list.remove(node).map(|(_, v)| v)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Returns the least recently used key, the next one to be evicted.
    pub(crate) fn lru_key(&self) -> Option<&K> {
        self.list.back().map(|(k, _)| k)
    }

    /// Resident keys from most to least recently used.
    pub(crate) fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.list.iter().map(|(k, _)| k.clone()).collect()
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.map.len(), self.list.len());
        assert_eq!(self.list.iter().count(), self.list.len());
        assert!(self.list.len() <= self.cap.get());
        for (key, &node) in self.map.iter() {
            let (stored, _) = self.list.get(node).expect("table points at a free slot");
            assert!(stored == key, "table entry points at a different key");
        }
    }
}

impl<K, V, S> fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.cap)
            .field("len", &self.list.len())
            .finish()
    }
}
