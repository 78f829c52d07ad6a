//! Thread-safe get-or-compute LRU cache.
//!
//! [`LruCache`] wraps a single [`LruSegment`] in a `parking_lot::Mutex` and
//! adds [`fetch`](LruCache::fetch): return the cached value for a key, or run
//! a loader to produce it, store it, and evict the least recently used entry
//! if the cache is full.
//!
//! # Locking
//!
//! A hit moves the entry to the front of the recency list, so every lookup is
//! a write. The hit path therefore takes the same exclusive lock as inserts;
//! a reader/writer lock would buy nothing. The lock is held only for the table
//! lookup and for the insert, never while the loader runs:
//!
//! ```text
//!   fetch(k, loader)
//!     lock ─ lookup k ─ unlock
//!        hit  ──▶ Hit(v)
//!        miss ──▶ loader()            (no lock held)
//!                   Err(e) ──▶ Err(e)  (cache untouched)
//!                   Ok(v)  ──▶ lock ─ evict tail if full ─ insert at head ─ unlock ──▶ Miss(v)
//! ```
//!
//! # Stampedes
//!
//! Two threads missing on the same key at the same time both run their
//! loader. Loads are not deduplicated per key. Both results are inserted in
//! lock order; the second replaces the first in place, so the key still owns
//! exactly one entry and the last completed load wins.
//!
//! # Sharing
//!
//! `LruCache` is `Send + Sync` when its keys, values and hasher are `Send`.
//! Build one instance and share it by reference or through an `Arc`.
//!
//! ```
//! use lru_fetch::LruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache: Arc<LruCache<u32, u64>> = Arc::new(LruCache::new(64).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..32u32 {
//!                 let value = cache
//!                     .fetch(i, || Ok::<_, ()>(u64::from(i) * 2))
//!                     .unwrap()
//!                     .into_value();
//!                 assert_eq!(value, u64::from(i) * 2);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 32);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::CacheError;
use crate::lru::LruSegment;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// Outcome of a [`fetch`](LruCache::fetch): the value and whether it was
/// already resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<V> {
    /// The key was resident; the loader was not called.
    Hit(V),
    /// The key was absent; the value came from the loader and is now cached.
    Miss(V),
}

impl<V> Lookup<V> {
    /// Returns `true` if the value was served from the cache.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    /// Returns `true` if the loader produced the value.
    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, Lookup::Miss(_))
    }

    /// Borrows the value.
    #[inline]
    pub fn value(&self) -> &V {
        match self {
            Lookup::Hit(v) | Lookup::Miss(v) => v,
        }
    }

    /// Consumes the lookup and returns the value.
    #[inline]
    pub fn into_value(self) -> V {
        match self {
            Lookup::Hit(v) | Lookup::Miss(v) => v,
        }
    }

    /// Splits the lookup into `(value, was_hit)`.
    #[inline]
    pub fn into_parts(self) -> (V, bool) {
        match self {
            Lookup::Hit(v) => (v, true),
            Lookup::Miss(v) => (v, false),
        }
    }
}

/// A bounded, thread-safe LRU cache with get-or-compute semantics.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone`.
/// - `V`: Value type. Must implement `Clone`; values are cloned out of the
///   cache so no lock is held once a call returns.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Example
///
/// ```
/// use lru_fetch::{Lookup, LruCache};
///
/// let cache = LruCache::new(2).unwrap();
///
/// assert_eq!(cache.fetch("a", || Ok::<_, ()>(1)), Ok(Lookup::Miss(1)));
/// assert_eq!(cache.fetch("b", || Ok::<_, ()>(2)), Ok(Lookup::Miss(2)));
/// assert_eq!(cache.fetch("a", || Ok::<_, ()>(0)), Ok(Lookup::Hit(1)));
///
/// // "b" is now the least recently used entry and makes room for "c".
/// assert_eq!(cache.fetch("c", || Ok::<_, ()>(3)), Ok(Lookup::Miss(3)));
/// assert!(!cache.contains(&"b"));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K, V> LruCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let config = LruCacheConfig::new(capacity)?;
        Ok(Self::init(config, None))
    }

    /// Creates a cache from a configuration with an optional hasher.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity of the cache
    /// * `hasher` - Optional hash builder. If `None`, uses `DefaultHashBuilder`
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Creates a cache with a custom hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        LruCache {
            segment: Mutex::new(LruSegment::with_hasher(config.capacity, hash_builder)),
        }
    }

    /// Returns the value for `key`, calling `loader` to produce it on a miss.
    ///
    /// On a hit the entry becomes the most recently used and `loader` is not
    /// called. On a miss the lock is released while `loader` runs, so a slow
    /// loader never blocks other callers. If the loader fails, its error is
    /// returned unchanged and the cache is left exactly as it was. If it
    /// succeeds, the value is inserted as the most recently used entry,
    /// evicting the least recently used one first when the cache is full.
    ///
    /// Concurrent misses on the same key each call their own loader; see the
    /// module docs on stampedes.
    ///
    /// # Example
    ///
    /// ```
    /// use lru_fetch::LruCache;
    ///
    /// let cache: LruCache<String, usize> = LruCache::new(8).unwrap();
    ///
    /// let first = cache.fetch("hello".to_string(), || Ok::<_, String>(5)).unwrap();
    /// assert!(first.is_miss());
    ///
    /// let failed = cache.fetch("world".to_string(), || Err("backend down".to_string()));
    /// assert_eq!(failed, Err("backend down".to_string()));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn fetch<F, E>(&self, key: K, loader: F) -> Result<Lookup<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let cached = self.segment.lock().get(&key).cloned();
        if let Some(value) = cached {
            return Ok(Lookup::Hit(value));
        }

        let value = loader()?;

        self.segment.lock().put(key, value.clone());
        Ok(Lookup::Miss(value))
    }

    /// Returns a clone of the value for `key` and marks it most recently used.
    ///
    /// Unlike [`fetch`](Self::fetch), a missing key is not loaded.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Returns a clone of the value for `key` without touching recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` is resident. Does not touch recency order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Removes `key` and returns its value, if resident.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Removes every entry in a single critical section.
    ///
    /// A `fetch` whose loader was running when `clear` was called inserts its
    /// value into the emptied cache; no entry from before the clear survives.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.segment.lock().cap().get()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Returns the key that the next eviction would remove.
    pub fn lru_key(&self) -> Option<K> {
        self.segment.lock().lru_key().cloned()
    }

    /// Returns the resident keys from most to least recently used.
    ///
    /// This is a snapshot taken under the lock and does not touch recency.
    pub fn keys(&self) -> Vec<K> {
        self.segment.lock().keys()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.segment.lock();
        f.debug_struct("LruCache")
            .field("capacity", &segment.cap())
            .field("len", &segment.len())
            .finish()
    }
}
