//! End-to-end evaluation benchmarks.
//!
//! Run with: `cargo bench --bench evaluation`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evaluation_engine::{InvestmentEvaluator, Projection};
use invest_core::config::{PolicyConfig, SimulationConfig};
use invest_core::ParameterInput;

/// Projection only, no simulation.
fn bench_projection(c: &mut Criterion) {
    let params = ParameterInput::default().validate().expect("valid parameters");

    c.bench_function("projection_compute", |b| {
        b.iter(|| black_box(Projection::compute(black_box(&params))))
    });
}

/// Rejection at the first gate never reaches the risk model.
fn bench_rejected_evaluation(c: &mut Criterion) {
    let evaluator =
        InvestmentEvaluator::monte_carlo(SimulationConfig::seeded(7), PolicyConfig::default());
    let params = ParameterInput::default().validate().expect("valid parameters");

    c.bench_function("evaluate_rejected", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&params))))
    });
}

/// Approval runs the full simulation.
fn bench_approved_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_approved");
    let params = ParameterInput {
        growth_rate: 0.30,
        horizon: 12,
        ..Default::default()
    }
    .validate()
    .expect("valid parameters");

    for parallel in [false, true] {
        let simulation = SimulationConfig {
            parallel,
            ..SimulationConfig::seeded(7)
        };
        let evaluator = InvestmentEvaluator::monte_carlo(simulation, PolicyConfig::default());
        let label = if parallel { "parallel" } else { "sequential" };

        group.bench_function(label, |b| {
            b.iter(|| black_box(evaluator.evaluate(black_box(&params))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_projection,
    bench_rejected_evaluation,
    bench_approved_evaluation
);
criterion_main!(benches);
