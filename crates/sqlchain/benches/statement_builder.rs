use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlchain::prelude::*;
use sqlchain::stmt::{self, Select};

/// SELECT col0, col1, ... FROM t WHERE (col0 = ?) AND (col1 = ?) ...
fn build_select(n: usize) -> QueryResult<Select> {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut select = stmt::select(&columns)?.from("t")?;
    for (i, column) in columns.iter().enumerate() {
        select = select.where_eq(column, i as i64)?;
    }
    select.limit(100)
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let Ok(select) = build_select(n) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &select, |b, select| {
            b.iter(|| black_box(select.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).and_then(|s| s.build())));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/batch_add");

    for n in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let batch = (0..n).try_fold(BatchBuilder::new(), |batch, i| {
                    batch.add(&stmt::insert_into("t")?.value("id", i as i64)?.value("name", "x")?)
                });
                black_box(batch)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_sql, bench_build_and_render, bench_batch);
criterion_main!(benches);
