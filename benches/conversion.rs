use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pattern_codec::{pattern_factory, to_pattern, to_string_with, to_value_with, OutputStyle};
use std::collections::BTreeMap;

type Table = BTreeMap<String, Vec<f64>>;

fn table(rows: usize) -> Table {
    (0..rows)
        .map(|i| {
            let values = (0..8).map(|j| (i * 8 + j) as f64 * 0.125).collect();
            (format!("row_{i}"), values)
        })
        .collect()
}

fn benchmark_derive_pattern(c: &mut Criterion) {
    c.bench_function("derive_nested_pattern", |b| {
        b.iter(|| to_pattern::<BTreeMap<Vec<u32>, Vec<Vec<f64>>>>())
    });
}

fn benchmark_factory(c: &mut Criterion) {
    let description =
        to_pattern::<BTreeMap<Vec<u32>, Vec<Vec<f64>>>>().description(OutputStyle::Machine);

    c.bench_function("rebuild_nested_pattern", |b| {
        b.iter(|| pattern_factory(black_box(&description)))
    });
}

fn benchmark_write_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_vec");
    let pattern = to_pattern::<Vec<i64>>();

    for size in [10, 100, 1000].iter() {
        let values: Vec<i64> = (0..*size).map(|i| i * 37 - 500).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| to_string_with(black_box(values), &pattern))
        });
    }

    group.finish();
}

fn benchmark_read_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_vec");
    let pattern = to_pattern::<Vec<i64>>();

    for size in [10, 100, 1000].iter() {
        let values: Vec<i64> = (0..*size).map(|i| i * 37 - 500).collect();
        let text = to_string_with(&values, &pattern).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| to_value_with::<Vec<i64>>(black_box(text), &pattern))
        });
    }

    group.finish();
}

fn benchmark_table_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_roundtrip");
    let pattern = to_pattern::<Table>();

    for rows in [4, 32, 128].iter() {
        let data = table(*rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| {
                let text = to_string_with(black_box(data), &pattern).unwrap();
                to_value_with::<Table>(&text, &pattern)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_derive_pattern,
    benchmark_factory,
    benchmark_write_vec,
    benchmark_read_vec,
    benchmark_table_roundtrip
);
criterion_main!(benches);
