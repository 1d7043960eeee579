use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use foamsort::arrays;
use foamsort::prelude::*;
use std::hint::black_box;

fn bench_shapes(c: &mut Criterion) {
    let count = 2_000;

    // The input shape decides how far each strategy's pass-shrinking
    // heuristic actually gets to cut.
    let shapes = [
        ("random", arrays::random_array(count, 1, 10_000)),
        ("sorted", arrays::sorted_array(count)),
        ("reverse", arrays::reverse_sorted_array(count)),
        ("nearly_sorted", arrays::nearly_sorted_array(count, 10)),
    ];

    for (label, input) in shapes {
        let mut group = c.benchmark_group(format!("Shape: {}", label));
        group.sample_size(10);
        group.throughput(Throughput::Elements(count as u64));

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

        group.finish();
    }
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
