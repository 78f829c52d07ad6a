use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lru_fetch::config::LruCacheConfig;
use lru_fetch::LruCache;
use std::num::NonZeroUsize;

fn make_cache<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Fetch Operations");

    {
        let cache = make_cache(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.fetch(i, || Ok::<_, ()>(i)).unwrap();
        }

        group.bench_function("fetch hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.fetch(i % CACHE_SIZE, || Ok::<_, ()>(i)).unwrap());
                }
            });
        });

        group.bench_function("peek", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.peek(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    {
        let cache = make_cache(CACHE_SIZE);
        let mut next = 0usize;

        group.bench_function("fetch miss with eviction", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    next += 1;
                    black_box(cache.fetch(next, || Ok::<_, ()>(next)).unwrap());
                }
            });
        });
    }

    {
        let cache: LruCache<usize, usize> = make_cache(CACHE_SIZE);

        group.bench_function("fetch failing loader", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.fetch(i, || Err::<usize, _>(i)).unwrap_err());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
