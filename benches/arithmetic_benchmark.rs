// ============================================================================
// Currency Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - Raw parsing and shift application
// 2. Same-Unit Arithmetic - The common fast path
// 3. Ratio Formation & Cancellation - Cross-unit division flows
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use currency_engine::prelude::*;

fn benchmark_construction(c: &mut Criterion) {
    let usd = Unit::base("USD");

    c.bench_function("construct_from_string", |b| {
        b.iter(|| usd.of(black_box("123456.789012345678")).unwrap())
    });

    c.bench_function("construct_wei", |b| {
        b.iter(|| usd.wei(black_box("1500000000000000000")).unwrap())
    });
}

fn benchmark_same_unit_arithmetic(c: &mut Criterion) {
    let usd = Unit::base("USD");
    let a = usd.of("123456.789").unwrap();
    let b_val = usd.of("0.000000001").unwrap();

    c.bench_function("same_unit_add", |b| {
        b.iter(|| black_box(&a).add(black_box(&b_val)).unwrap())
    });

    c.bench_function("scalar_mul", |b| {
        b.iter(|| black_box(&a).mul(black_box(3i64)).unwrap())
    });

    c.bench_function("same_unit_compare", |b| {
        b.iter(|| black_box(&a).lt(black_box(&b_val)).unwrap())
    });
}

fn benchmark_ratio_flow(c: &mut Criterion) {
    let usd = Unit::base("USD");
    let dai = Unit::base("DAI");
    let collateral = usd.of("600.5").unwrap();
    let debt = dai.of("200").unwrap();
    let price = collateral.div(&debt).unwrap();

    c.bench_function("ratio_formation", |b| {
        b.iter(|| black_box(&collateral).div(black_box(&debt)).unwrap())
    });

    c.bench_function("ratio_cancellation", |b| {
        b.iter(|| black_box(&debt).mul(black_box(&price)).unwrap())
    });
}

fn benchmark_rendering(c: &mut Criterion) {
    let eth = Unit::base("ETH");
    let q = eth.wei("1999999999999999999").unwrap();

    c.bench_function("to_fixed_wei", |b| b.iter(|| black_box(&q).to_fixed(Shift::Wei)));
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_same_unit_arithmetic,
    benchmark_ratio_flow,
    benchmark_rendering
);
criterion_main!(benches);
