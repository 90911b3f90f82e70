//! Integration tests for component interactions.
//!
//! These tests verify that the evaluator, risk estimator and history store work
//! together correctly.

use evaluation_engine::{Gate, InvestmentEvaluator};
use history_store::{CsvHistoryStore, HistoryRecord, RecordSink};
use invest_core::config::{PolicyConfig, SimulationConfig};
use invest_core::{EvaluationResult, InvestmentParameters, ParameterInput, RejectionReason};

fn approving_params() -> InvestmentParameters {
    ParameterInput {
        growth_rate: 0.30,
        horizon: 12,
        ..Default::default()
    }
    .validate()
    .unwrap()
}

fn seeded_evaluator() -> InvestmentEvaluator {
    InvestmentEvaluator::monte_carlo(SimulationConfig::seeded(42), PolicyConfig::default())
}

/// Test that the default form values are rejected before any simulation.
#[test]
fn test_default_form_rejected_for_negative_growth() {
    let params = ParameterInput::default().validate().unwrap();
    let trace = seeded_evaluator().evaluate_traced(&params).unwrap();

    assert_eq!(trace.rejected_at, Some(Gate::NegativeGrowth));
    assert!(trace.gates_passed.is_empty());
    assert!(trace.risk.is_none());
    match trace.result {
        EvaluationResult::Rejected {
            reason: RejectionReason::NegativeGrowth { net_gain },
        } => assert!((net_gain - -301_695.32).abs() < 0.01),
        other => panic!("expected negative growth rejection, got {other:?}"),
    }
}

/// Test evaluation, persistence and reload for an approved proposal.
#[test]
fn test_approval_is_recorded_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("investment_ml_data.csv");
    let mut store = CsvHistoryStore::open(&path).unwrap();

    let params = approving_params();
    let result = seeded_evaluator().evaluate(&params).unwrap();
    let approval = result.approval().copied().expect("proposal should be approved");
    assert!(approval.risk_probability >= 0.85);

    let record = HistoryRecord::from_result(&params, &result).unwrap();
    store.record(&record).unwrap();

    let reopened = CsvHistoryStore::open(&path).unwrap();
    let rows = reopened.load_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].horizon, 12);
    assert_eq!(rows[0].growth_rate, 0.30);
    assert!((rows[0].investor_return - approval.investor_return).abs() < 1e-6);
    assert!((rows[0].max_safe_investment - approval.investor_return / 1.4).abs() < 1e-6);
}

/// Test that rejections never produce a history row.
#[test]
fn test_rejection_leaves_history_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    let mut store = CsvHistoryStore::open(&path).unwrap();

    let params = ParameterInput {
        growth_rate: 0.30,
        horizon: 12,
        bank_loan: 10_000_000.0,
        ..Default::default()
    }
    .validate()
    .unwrap();
    let result = seeded_evaluator().evaluate(&params).unwrap();

    assert!(matches!(
        result.rejection(),
        Some(RejectionReason::BankLoanTooRisky { .. })
    ));
    if let Some(record) = HistoryRecord::from_result(&params, &result) {
        store.record(&record).unwrap();
    }
    assert!(store.load_all().unwrap().is_empty());
}

/// Test that history accumulates across independent evaluations in order.
#[test]
fn test_history_accumulates_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    let evaluator = seeded_evaluator();

    for horizon in [10, 12, 14] {
        let params = ParameterInput {
            growth_rate: 0.30,
            horizon,
            ..Default::default()
        }
        .validate()
        .unwrap();
        let result = evaluator.evaluate(&params).unwrap();
        let record = HistoryRecord::from_result(&params, &result).unwrap();
        CsvHistoryStore::open(&path).unwrap().record(&record).unwrap();
    }

    let rows = CsvHistoryStore::open(&path).unwrap().load_all().unwrap();
    let horizons: Vec<u32> = rows.iter().map(|r| r.horizon).collect();
    assert_eq!(horizons, vec![10, 12, 14]);
}

/// Test the one-shot estimator against a seeded model run.
#[test]
fn test_estimate_risk_matches_approval_scenario() {
    let probability =
        risk_estimator::estimate_risk(80_000.0, 0.30, 20_000.0, 0.15, 0.30, 12, Some(5_000))
            .unwrap();
    assert!(probability > 0.9, "probability was {probability}");
    assert!(probability <= 1.0);
}
