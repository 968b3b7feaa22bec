use std::{fs, time::Duration};

use criterion::{criterion_group, criterion_main, Criterion};
use donor_medians::{ContributionProcessor, RunningAggregate};
use rust_decimal::Decimal;

pub fn criterion_benchmark(c: &mut Criterion) {
    // Deterministic scramble of cent amounts, with plenty of repeats
    let amounts: Vec<Decimal> = (0..2000i64)
        .map(|i| Decimal::new((i * 7919) % 100_003, 2))
        .collect();

    let records = fs::read_to_string("./test_data/itcont.txt").unwrap();

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .sample_size(1000);

    group.bench_function("aggregate hot key", |b| {
        b.iter(|| {
            let mut aggregate = RunningAggregate::new();

            for amount in amounts.iter() {
                aggregate.add(*amount);
                let _median = aggregate.median();
            }
        })
    });

    group.bench_function("processor sample file", |b| {
        b.iter(|| {
            let mut processor =
                ContributionProcessor::new(Vec::<String>::new(), Vec::<String>::new());

            for line in records.lines() {
                processor.process_record(line).unwrap();
            }

            let _flushed = processor.flush().unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
