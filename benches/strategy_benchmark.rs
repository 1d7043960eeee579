use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use foamsort::arrays;
use foamsort::prelude::*;
use std::hint::black_box;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strategy Comparison");
    group.sample_size(10);

    // Small on purpose: the strategies are quadratic.
    let input = arrays::random_array(2_000, 1, 10_000);

    for strategy in Strategy::ALL {
        group.bench_function(strategy.as_str(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    sort_mut(black_box(&mut data), strategy);
                },
                BatchSize::SmallInput,
            )
        });
    }

    // Baseline
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
