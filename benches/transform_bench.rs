//! Benchmarks for the chart transforms
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launchboard::charts::{payload_scatter, success_pie, Figure, RangePolicy};
use launchboard::dataset::{LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> LaunchDataset {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                outcome,
                CATEGORIES[i % CATEGORIES.len()],
            )
        })
        .collect();
    LaunchDataset::new(records).unwrap()
}

fn bench_pie(c: &mut Criterion) {
    let mut group = c.benchmark_group("pie");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| success_pie(black_box(&dataset), &SiteSelection::All))
        });

        let site = SiteSelection::site(SITES[0]);
        group.bench_function(format!("single_site_{}", size), |b| {
            b.iter(|| success_pie(black_box(&dataset), &site))
        });
    }

    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter");
    let range = PayloadRange::new(2_000.0, 8_000.0);

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| {
                payload_scatter(
                    black_box(&dataset),
                    &SiteSelection::All,
                    range,
                    RangePolicy::default(),
                )
            })
        });

        group.bench_function(format!("to_plotly_{}", size), |b| {
            let figure = Figure::from(payload_scatter(
                &dataset,
                &SiteSelection::All,
                range,
                RangePolicy::default(),
            ));
            b.iter(|| black_box(&figure).to_plotly())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pie, bench_scatter);
criterion_main!(benches);
