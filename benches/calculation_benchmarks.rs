//! Performance benchmarks for the Child Support Calculation Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single calculation through the engine: < 10μs mean
//! - Single calculation through the HTTP router: < 1ms mean
//! - Batch of 1000 calculations: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use support_engine::api::{AppState, create_router};
use support_engine::calculation::calculate_support;
use support_engine::config::PolicyConfig;
use support_engine::models::RawCaseInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// A representative self-employed case with every deduction populated.
fn sample_case(income: &str) -> RawCaseInput {
    RawCaseInput {
        income_amount: Some(income.to_string()),
        income_frequency: Some("12".to_string()),
        medical_ins_amount: Some("350.00".to_string()),
        medical_ins_frequency: Some("12".to_string()),
        dental_ins_amount: Some("54.50".to_string()),
        dental_ins_frequency: Some("12".to_string()),
        union_dues_amount: Some("$50.00".to_string()),
        union_dues_frequency: Some("12".to_string()),
        self_employed: Some("YES".to_string()),
        children_inside: Some("1".to_string()),
        children_outside: Some("0".to_string()),
    }
}

/// Benchmark: a single calculation through the pure engine.
///
/// Target: < 10μs mean
fn bench_engine_single(c: &mut Criterion) {
    let policy = PolicyConfig::tax_year_2020();
    let raw = sample_case("$5,000.00");

    c.bench_function("engine_single", |b| {
        b.iter(|| black_box(calculate_support(black_box(&raw), &policy).unwrap()))
    });
}

/// Benchmark: batches of calculations with varied incomes.
///
/// Target: < 50ms mean for 1000 cases
fn bench_engine_batches(c: &mut Criterion) {
    let policy = PolicyConfig::tax_year_2020();

    let mut group = c.benchmark_group("engine_batches");

    for batch_size in [100usize, 1000] {
        let cases: Vec<RawCaseInput> = (0..batch_size)
            .map(|i| sample_case(&format!("${}.00", 2000 + i)))
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("cases", batch_size),
            &cases,
            |b, cases| {
                b.iter(|| {
                    let mut results = Vec::with_capacity(cases.len());
                    for raw in cases {
                        results.push(calculate_support(raw, &policy).unwrap());
                    }
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: a single calculation through the HTTP router.
///
/// Target: < 1ms mean
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(PolicyConfig::tax_year_2020());
    let router = create_router(state);

    let body = serde_json::json!({
        "income_amount": "$5,000.00",
        "income_frequency": 12,
        "medical_ins_amount": "350.00",
        "medical_ins_frequency": 12,
        "dental_ins_amount": "54.50",
        "dental_ins_frequency": 12,
        "union_dues_amount": "$50.00",
        "union_dues_frequency": 12,
        "self_employed": "YES",
        "children_inside": 1,
        "children_outside": 0
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_engine_single,
    bench_engine_batches,
    bench_http_calculate,
);
criterion_main!(benches);
