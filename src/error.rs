//! Error types returned by the cache.
//!
//! Loader failures are never wrapped here: [`LruCache::fetch`](crate::LruCache::fetch)
//! is generic over the loader's own error type and hands it back untouched.

use thiserror::Error;

/// Errors raised while constructing a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CacheError {
    /// The requested capacity cannot hold a single entry.
    #[error("invalid cache capacity {capacity}: a cache must hold at least one entry")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
}
