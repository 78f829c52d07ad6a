//! Cache Configuration
//!
//! [`LruCacheConfig`] has public fields for simple instantiation. The capacity
//! is a [`NonZeroUsize`], so a config built by hand is always valid; use
//! [`LruCacheConfig::new`] or `TryFrom<usize>` to validate a plain integer.
//!
//! # Sizing
//!
//! `capacity` bounds the number of resident entries, not their byte weight.
//! Each entry costs roughly two copies of the key, one value, and three words
//! of bookkeeping (two list links plus the table slot).
//!
//! # Examples
//!
//! ```
//! use lru_fetch::config::LruCacheConfig;
//! use lru_fetch::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.capacity(), 1000);
//!
//! assert!(LruCacheConfig::new(0).is_err());
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an [`LruCache`](crate::LruCache).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Builds a config from a plain capacity, rejecting zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        NonZeroUsize::new(capacity)
            .map(|capacity| LruCacheConfig { capacity })
            .ok_or(CacheError::InvalidCapacity { capacity })
    }
}

impl TryFrom<usize> for LruCacheConfig {
    type Error = CacheError;

    fn try_from(capacity: usize) -> Result<Self, Self::Error> {
        LruCacheConfig::new(capacity)
    }
}

impl From<NonZeroUsize> for LruCacheConfig {
    fn from(capacity: NonZeroUsize) -> Self {
        LruCacheConfig { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
