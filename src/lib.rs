#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Fetching
//!
//! [`LruCache::fetch`] is the one operation most callers need. It returns a
//! [`Lookup`] that says whether the value was already cached:
//!
//! ```rust
//! use lru_fetch::{Lookup, LruCache};
//!
//! let cache = LruCache::new(2).unwrap();
//!
//! let lookup = cache.fetch("a", || Ok::<_, ()>(1)).unwrap();
//! assert_eq!(lookup, Lookup::Miss(1));
//!
//! let (value, was_hit) = cache.fetch("a", || Ok::<_, ()>(99)).unwrap().into_parts();
//! assert_eq!((value, was_hit), (1, true));
//! ```
//!
//! ## Eviction Order
//!
//! Every hit and every insert moves the entry to the front of the recency
//! list. When the cache is full, a miss evicts the entry at the back.
//!
//! ```text
//! capacity 2
//!
//!   fetch a (miss)   [a]
//!   fetch b (miss)   [b, a]
//!   fetch a (hit)    [a, b]
//!   fetch c (miss)   [c, a]      b evicted
//!   fetch b (miss)   [b, c]      a evicted
//!   fetch c (hit)    [c, b]
//!   fetch a (miss)   [a, c]      b evicted
//! ```
//!
//! ## Construction
//!
//! ```rust
//! use lru_fetch::config::LruCacheConfig;
//! use lru_fetch::{CacheError, LruCache};
//! use core::num::NonZeroUsize;
//!
//! // From a plain integer: zero is rejected.
//! assert_eq!(
//!     LruCache::<u32, u32>::new(0).unwrap_err(),
//!     CacheError::InvalidCapacity { capacity: 0 },
//! );
//!
//! // From a config: the type already guarantees a non-zero capacity.
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(100).unwrap(),
//! };
//! let cache: LruCache<u32, String> = LruCache::init(config, None);
//! assert!(cache.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`cache`]: the thread-safe [`LruCache`] and [`Lookup`]
//! - [`config`]: [`LruCacheConfig`](config::LruCacheConfig)
//! - [`error`]: [`CacheError`]

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Arena-backed doubly linked list keeping entries in recency order.
///
/// Internal infrastructure: nodes are addressed by index handles stored in
/// the key table.
pub(crate) mod list;

/// Single-threaded LRU segment holding the key table and recency list.
pub(crate) mod lru;

/// Thread-safe get-or-compute cache.
///
/// Wraps one LRU segment in a mutex and adds `fetch`, which runs a loader
/// outside the lock on a miss.
pub mod cache;

/// Cache configuration.
pub mod config;

/// Error types.
pub mod error;

pub use cache::{Lookup, LruCache};
pub use error::CacheError;
