//! Fetch Cache Usage Examples
//!
//! Demonstrates memoizing an expensive computation behind a shared cache.
//!
//! Run with: cargo run --example fetch_usage

extern crate lru_fetch;

use lru_fetch::{Lookup, LruCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
enum LookupError {
    NotFound(u64),
}

/// Pretends to be a slow backend. Odd multiples of 101 do not exist.
fn slow_square(n: u64) -> Result<u64, LookupError> {
    thread::sleep(Duration::from_millis(2));
    if n % 101 == 0 && (n / 101) % 2 == 1 {
        return Err(LookupError::NotFound(n));
    }
    Ok(n * n)
}

fn main() {
    println!("=== Single-threaded walkthrough ===");
    let cache: LruCache<&str, i32> = LruCache::new(2).expect("capacity is non-zero");
    for (key, value) in [("a", 1), ("b", 2), ("a", 1), ("c", 3), ("b", 2), ("c", 3), ("a", 1)] {
        let lookup = cache.fetch(key, || Ok::<_, ()>(value)).expect("loader is infallible");
        let kind = match lookup {
            Lookup::Hit(_) => "hit",
            Lookup::Miss(_) => "miss",
        };
        println!("fetch {:?} -> {} ({}), resident: {:?}", key, lookup.value(), kind, cache.keys());
    }

    println!();
    println!("=== Shared cache across threads ===");
    let cache: Arc<LruCache<u64, u64>> = Arc::new(LruCache::new(256).expect("capacity is non-zero"));
    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    let failures = Arc::new(AtomicUsize::new(0));

    let start = Instant::now();
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let hits = Arc::clone(&hits);
            let misses = Arc::clone(&misses);
            let failures = Arc::clone(&failures);
            thread::spawn(move || {
                for i in 0..500u64 {
                    let n = (i * 17 + t * 5) % 400;
                    match cache.fetch(n, || slow_square(n)) {
                        Ok(Lookup::Hit(_)) => hits.fetch_add(1, Ordering::Relaxed),
                        Ok(Lookup::Miss(_)) => misses.fetch_add(1, Ordering::Relaxed),
                        Err(LookupError::NotFound(missing)) => {
                            assert_eq!(missing % 101, 0);
                            failures.fetch_add(1, Ordering::Relaxed)
                        }
                    };
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    println!("elapsed:  {:?}", start.elapsed());
    println!("hits:     {}", hits.load(Ordering::Relaxed));
    println!("misses:   {}", misses.load(Ordering::Relaxed));
    println!("failures: {}", failures.load(Ordering::Relaxed));
    println!("resident: {} / {}", cache.len(), cache.capacity());

    cache.clear();
    println!("after clear: {} resident", cache.len());
}
