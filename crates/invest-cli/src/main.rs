//! Investment CLI
//!
//! Evaluates one investment proposal, records it when approved, and prints the
//! approval history.

mod args;
mod render;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use evaluation_engine::{InvestmentEvaluator, PolicyTrace};
use history_store::{CsvHistoryStore, HistoryRecord, RecordSink};
use invest_core::config::Config;
use invest_core::InvestmentParameters;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info, info_span, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

const DEFAULT_LOG_FILTER: &str =
    "invest_cli=info,evaluation_engine=info,risk_estimator=info,history_store=info";

/// Machine-readable report printed with `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    request_id: Uuid,
    parameters: &'a InvestmentParameters,
    #[serde(flatten)]
    trace: &'a PolicyTrace,
    history: Option<Vec<HistoryRecord>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.display.log_json);

    let params = match cli.parameter_input().validate() {
        Ok(params) => params,
        Err(err) => {
            warn!(error = %err, "Rejected invalid input");
            eprintln!("Invalid input: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config, &params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Evaluation request failed");
            eprintln!("An unexpected error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    // Logs go to stderr so stdout stays clean for reports.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Evaluate, persist on approval, then display the outcome and history.
fn run(cli: &Cli, config: &Config, params: &InvestmentParameters) -> Result<()> {
    let request_id = Uuid::new_v4();
    let span = info_span!("evaluation", %request_id);
    let _guard = span.enter();

    info!(
        trials = config.simulation.trials,
        seeded = config.simulation.random_seed.is_some(),
        threshold = config.policy.approval_threshold,
        "Evaluating investment"
    );

    let mut store = if cli.no_history {
        None
    } else {
        let path = &config.store.data_file;
        let store = CsvHistoryStore::open(path)
            .with_context(|| format!("opening history store {}", path.display()))?;
        Some(store)
    };

    let evaluator =
        InvestmentEvaluator::monte_carlo(config.simulation.clone(), config.policy.clone());
    let trace = evaluator.evaluate_traced(params)?;

    if let (Some(store), Some(record)) = (
        store.as_mut(),
        HistoryRecord::from_result(params, &trace.result),
    ) {
        store
            .record(&record)
            .context("saving approved investment")?;
        info!(path = %store.path().display(), "Recorded approved investment");
    }

    let history = store
        .as_ref()
        .map(|store| store.load_all().context("reading investment history"))
        .transpose()?;

    if cli.json {
        let report = JsonReport {
            request_id,
            parameters: params,
            trace: &trace,
            history,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render::outcome(&trace.result, &config.display.currency));
    if let Some(records) = history {
        println!();
        print!("{}", render::history(&records));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> (Cli, Config) {
        let cli = Cli::parse_from(std::iter::once("invest-cli").chain(args.iter().copied()));
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        (cli, config)
    }

    #[test]
    fn test_run_records_approval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path_arg = path.to_string_lossy().to_string();
        let (cli, config) = cli(&[
            "--growth-pct",
            "30",
            "--horizon",
            "12",
            "--seed",
            "42",
            "--data-file",
            &path_arg,
        ]);
        let params = cli.parameter_input().validate().unwrap();

        run(&cli, &config, &params).unwrap();
        run(&cli, &config, &params).unwrap();

        let rows = CsvHistoryStore::open(&path).unwrap().load_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].horizon, 12);
    }

    #[test]
    fn test_run_rejection_creates_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path_arg = path.to_string_lossy().to_string();
        let (cli, config) = cli(&["--data-file", &path_arg, "--json"]);
        let params = cli.parameter_input().validate().unwrap();

        run(&cli, &config, &params).unwrap();

        let rows = CsvHistoryStore::open(&path).unwrap().load_all().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_history_skips_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path_arg = path.to_string_lossy().to_string();
        let (cli, config) = cli(&[
            "--growth-pct",
            "30",
            "--horizon",
            "12",
            "--seed",
            "42",
            "--no-history",
            "--data-file",
            &path_arg,
        ]);
        let params = cli.parameter_input().validate().unwrap();

        run(&cli, &config, &params).unwrap();
        assert!(!path.exists());
    }
}
