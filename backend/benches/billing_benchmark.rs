use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use gpm_rust::models::{Scope, VendorMatch, VendorRecord};
use gpm_rust::services::billing::generate;
use gpm_rust::services::lead_times::extract_lead_times;

const SCOPE_TYPES: &[&str] = &[
    "STOREFRONT",
    "CURTAIN WALL",
    "FIRE-RATED",
    "MONOLITHIC",
    "MIRRORS",
];

const LEAD_TIMES: &[&str] = &["8 weeks", "16 weeks", "2-3 days", "approximately 6 weeks"];

fn sample_scopes(count: usize) -> Vec<Scope> {
    (0..count)
        .map(|i| Scope {
            scope_type: SCOPE_TYPES[i % SCOPE_TYPES.len()].to_string(),
            description: format!("Scope package {}", i),
            matched_vendors: vec![VendorMatch {
                material_category: "Glass".to_string(),
                vendors: LEAD_TIMES
                    .iter()
                    .map(|lead_time| VendorRecord {
                        lead_time: lead_time.to_string(),
                        ..Default::default()
                    })
                    .collect(),
            }],
            ..Default::default()
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("billing_schedule");
    let anchor = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for count in [10usize, 100, 500] {
        let scopes = sample_scopes(count);
        group.bench_with_input(BenchmarkId::new("generate", count), &scopes, |b, scopes| {
            b.iter(|| generate(black_box(scopes), black_box(anchor)));
        });
    }

    group.finish();
}

fn bench_lead_time_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("lead_times");

    let scope = sample_scopes(1).pop().unwrap();
    group.bench_function("extract_lead_times", |b| {
        b.iter(|| extract_lead_times(black_box(&scope)));
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_lead_time_extraction);
criterion_main!(benches);
