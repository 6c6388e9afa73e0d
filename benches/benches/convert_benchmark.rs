//! Conversion benchmarks: table reading, row parsing and record encoding.
//!
//! Run with: `cargo bench --package t6conv-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use t6conv_bench::{minute_rows, records, render_csv};
use t6conv_format::{Formatter, RecordLayout, T6Formatter, decode_records, write_partitions};
use t6conv_read::{parse_minute_rows, read_table_from};
use t6conv_types::Resolution;
use tempfile::TempDir;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn read_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("read_table");

    for n in SIZES {
        let text = render_csv(&minute_rows(n));
        group.throughput(Throughput::Bytes(text.len() as u64));
        let bytes = text.as_bytes();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.to_async(&runtime)
                .iter(move || async move { read_table_from(black_box(bytes)).await.unwrap() });
        });
    }

    group.finish();
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_minute_rows");

    for n in SIZES {
        let rows = minute_rows(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter(|| parse_minute_rows(black_box(rows)).unwrap());
        });
    }

    group.finish();
}

fn encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for layout in [RecordLayout::Packed, RecordLayout::Zorro] {
        let recs = records(100_000);
        let formatter = T6Formatter::new().with_layout(layout);
        group.throughput(Throughput::Bytes((recs.len() * layout.record_size()) as u64));

        group.bench_with_input(BenchmarkId::new("write", layout), &recs, |b, recs| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(recs.len() * layout.record_size());
                formatter.write_records(black_box(recs), &mut buf).unwrap();
                buf
            });
        });

        let mut encoded = Vec::new();
        formatter.write_records(&recs, &mut encoded).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", layout), &encoded, |b, data| {
            b.iter(|| decode_records(black_box(data), layout).unwrap().count());
        });
    }

    group.finish();
}

fn write_benchmark(c: &mut Criterion) {
    let rows = minute_rows(100_000);
    let partitions = parse_minute_rows(&rows).unwrap();

    let mut group = c.benchmark_group("write_partitions");
    group.sample_size(20);
    group.throughput(Throughput::Elements(partitions.total_records() as u64));
    group.bench_function("minute_100k", |b| {
        let dir = TempDir::new().unwrap();
        b.iter(|| {
            write_partitions(
                partitions.clone(),
                dir.path(),
                "bench",
                Resolution::Minute,
                RecordLayout::Packed,
            )
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    read_benchmark,
    parse_benchmark,
    encode_benchmark,
    write_benchmark
);
criterion_main!(benches);
