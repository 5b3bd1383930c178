//! Aggregation hot-path benchmarks.
//!
//! Run with: `cargo bench --package quinta-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quinta_bench::{batches, synthetic_rows};
use quinta_lib::{CsvFormatter, DaySession, Formatter, TradingDay};
use std::hint::black_box;

fn session_benchmark(c: &mut Criterion) {
    let day: TradingDay = "2024-01-10".parse().unwrap();
    let mut group = c.benchmark_group("day_session");

    for count in [10_000usize, 100_000, 1_000_000] {
        let rows = synthetic_rows(day, count);
        let split = batches(&rows, 8192);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("ingest", count), &split, |b, split| {
            b.iter(|| {
                let mut session = DaySession::new(day);
                for batch in split {
                    session.ingest_batch(black_box(batch));
                }
                black_box(session.finish())
            });
        });
    }

    group.finish();
}

fn csv_benchmark(c: &mut Criterion) {
    let day: TradingDay = "2024-01-10".parse().unwrap();
    let mut session = DaySession::new(day);
    for batch in batches(&synthetic_rows(day, 100_000), 8192) {
        session.ingest_batch(&batch);
    }
    let summary = session.finish();
    let formatter = CsvFormatter::new();

    c.bench_function("csv_candles", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(32 * 1024);
            formatter
                .write_candles(black_box(&summary.candles), &mut out)
                .unwrap();
            black_box(out)
        });
    });
}

criterion_group!(benches, session_benchmark, csv_benchmark);
criterion_main!(benches);
