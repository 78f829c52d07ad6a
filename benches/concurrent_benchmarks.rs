//! Concurrent Fetch Benchmarks
//!
//! Measures fetch throughput when several threads share one cache, for
//! read-heavy and churn-heavy access patterns.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lru_fetch::LruCache;
use std::sync::Arc;
use std::thread;

const CACHE_SIZE: usize = 10_000;
const OPS_PER_THREAD: usize = 1_000;

fn run_threads<F>(cache: &Arc<LruCache<usize, usize>>, threads: usize, key_of: F)
where
    F: Fn(usize, usize) -> usize + Copy + Send + 'static,
{
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let cache = Arc::clone(cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = key_of(t, i);
                    black_box(cache.fetch(key, || Ok::<_, ()>(key)).unwrap());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

/// All keys resident: every fetch is a hit and a recency promotion.
fn concurrent_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Hits");

    let cache: Arc<LruCache<usize, usize>> = Arc::new(LruCache::new(CACHE_SIZE).unwrap());
    for i in 0..CACHE_SIZE {
        cache.fetch(i, || Ok::<_, ()>(i)).unwrap();
    }

    for threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements((threads * OPS_PER_THREAD) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &n| {
            b.iter(|| run_threads(&cache, n, |t, i| (t * 7919 + i) % CACHE_SIZE));
        });
    }

    group.finish();
}

/// Key space four times the capacity: most fetches miss and evict.
fn concurrent_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Churn");

    let cache: Arc<LruCache<usize, usize>> = Arc::new(LruCache::new(CACHE_SIZE).unwrap());

    for threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements((threads * OPS_PER_THREAD) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &n| {
            b.iter(|| run_threads(&cache, n, |t, i| (t * 104_729 + i * 13) % (CACHE_SIZE * 4)));
        });
    }

    group.finish();
}

criterion_group!(benches, concurrent_hits, concurrent_churn);
criterion_main!(benches);
