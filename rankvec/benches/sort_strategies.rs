use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rankvec::{SortStrategy, Vector, VectorConfig};

fn shuffled(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..len).map(|_| rng.random_range(0..len as u64)).collect()
}

fn bench_sort_strategies(c: &mut Criterion) {
    let input = shuffled(2_000);
    let mut group = c.benchmark_group("sort_strategies");
    for strategy in SortStrategy::ALL.into_iter().filter(|s| *s != SortStrategy::Random) {
        group.bench_function(BenchmarkId::from_parameter(strategy), |b| {
            b.iter(|| {
                let mut v = Vector::from_slice(&input).configured(VectorConfig::seeded(1));
                v.sort_with(strategy)
            });
        });
    }
    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("push_then_pop_10k", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..10_000u32 {
                v.push(i);
            }
            while v.pop().is_ok() {}
            v.capacity()
        });
    });
}

criterion_group!(benches, bench_sort_strategies, bench_push_pop);
criterion_main!(benches);
