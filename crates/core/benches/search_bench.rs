use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use datascope_core::catalog::DatasetCatalog;
use datascope_core::dataset::Dataset;
use datascope_core::index::TokenIndex;
use datascope_core::search::{SearchEngine, SearchOptions};
use serde_json::json;

fn synthetic_dataset(i: usize) -> Dataset {
    Dataset::new(
        format!("dataset_{i}"),
        format!("Dataset {i}"),
        if i % 2 == 0 { "Shipping & Logistics" } else { "Energy" },
        if i % 3 == 0 { "Architecture" } else { "Operations" },
    )
    .with_description(format!("Synthetic dataset number {i}"))
    .with_tags([format!("tag_{}", i % 7), "shipping".to_string()])
    .with_data_count(i)
    .with_data(json!({
        "items": (0..20)
            .map(|j| json!({
                "name": format!("item {i} {j}"),
                "location": format!("port {}", j % 5),
                "details": {"commodity": "iron ore", "volume": j}
            }))
            .collect::<Vec<_>>()
    }))
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.throughput(Throughput::Elements(100));

    group.bench_function("100_datasets", |b| {
        let datasets: Vec<Dataset> = (0..100).map(synthetic_dataset).collect();
        b.iter(|| {
            for dataset in &datasets {
                black_box(TokenIndex::build(dataset));
            }
        });
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let mut catalog = DatasetCatalog::new();
    for i in 0..100 {
        catalog.register(synthetic_dataset(i));
    }
    let engine = SearchEngine::new();
    let options = SearchOptions::default();

    group.bench_function("single_term_100_datasets", |b| {
        b.iter(|| black_box(engine.search(&catalog, "shipping", &options)));
    });

    group.bench_function("multi_term_100_datasets", |b| {
        b.iter(|| black_box(engine.search(&catalog, "iron ore port", &options)));
    });

    group.bench_function("filtered_100_datasets", |b| {
        let filtered = SearchOptions {
            industries: vec!["Energy".to_string()],
            ..Default::default()
        };
        b.iter(|| black_box(engine.search(&catalog, "shipping", &filtered)));
    });

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
