use agropredict::dataset::{DATASET_PREVIEW_LIMIT, DatasetSummary, filter_records, generate_default};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const RECORD_COUNT: usize = 10_000;

fn bench_generate(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("generate", RECORD_COUNT),
        &RECORD_COUNT,
        |b, &count| {
            b.iter(|| generate_default(black_box(count), Some(7)));
        },
    );
}

fn bench_search(c: &mut Criterion) {
    let records = generate_default(RECORD_COUNT, Some(7));
    for query in ["", "rice", "tamil", "zzz"] {
        c.bench_with_input(BenchmarkId::new("filter_records", query), &query, |b, query| {
            b.iter(|| filter_records(&records, black_box(query), DATASET_PREVIEW_LIMIT).len());
        });
    }
}

fn bench_summary(c: &mut Criterion) {
    let records = generate_default(RECORD_COUNT, Some(7));
    c.bench_function("summary", |b| {
        b.iter(|| DatasetSummary::from_records(black_box(&records)));
    });
}

criterion_group!(benches, bench_generate, bench_search, bench_summary);
criterion_main!(benches);
