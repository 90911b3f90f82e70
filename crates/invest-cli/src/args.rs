//! Command-line arguments.

use clap::Parser;
use invest_core::config::Config;
use invest_core::ParameterInput;
use std::path::PathBuf;

/// Evaluate an investment proposal and record approvals.
///
/// Percent flags take whole percentages (`--tax-pct 15` means 15%).
#[derive(Debug, Parser)]
#[command(name = "invest-cli", version, about = "Advanced investment intelligence system")]
pub struct Cli {
    /// Primary revenue
    #[arg(long, default_value_t = 80_000.0)]
    pub primary_revenue: f64,

    /// Growth rate per period (%)
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub growth_pct: f64,

    /// Expenses per period
    #[arg(long, default_value_t = 20_000.0)]
    pub expenses: f64,

    /// Tax rate (%)
    #[arg(long, default_value_t = 15.0)]
    pub tax_pct: f64,

    /// Investor share of net gain (%)
    #[arg(long, default_value_t = 30.0)]
    pub investor_share_pct: f64,

    /// Horizon in months
    #[arg(long, default_value_t = 24)]
    pub horizon: u32,

    /// Expected return multiple
    #[arg(long, default_value_t = 1.4)]
    pub expected_multiple: f64,

    /// Bank loan
    #[arg(long, default_value_t = 300_000.0)]
    pub bank_loan: f64,

    /// Bank interest per period (%)
    #[arg(long, default_value_t = 12.0, allow_negative_numbers = true)]
    pub bank_rate_pct: f64,

    /// History CSV file (overrides INVEST_DATA_FILE)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Monte Carlo trials (overrides INVEST_SIM_TRIALS)
    #[arg(long)]
    pub trials: Option<usize>,

    /// Fixed simulation seed (overrides INVEST_SIM_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run simulation trials in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Minimum success probability for approval, 0 to 1
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Neither record nor display history
    #[arg(long)]
    pub no_history: bool,
}

impl Cli {
    /// Parameters in fractional form; percentages are divided by 100.
    pub fn parameter_input(&self) -> ParameterInput {
        ParameterInput {
            primary_revenue: self.primary_revenue,
            growth_rate: self.growth_pct / 100.0,
            expenses: self.expenses,
            tax_rate: self.tax_pct / 100.0,
            investor_share: self.investor_share_pct / 100.0,
            horizon: self.horizon,
            expected_multiple: self.expected_multiple,
            bank_loan: self.bank_loan,
            bank_rate: self.bank_rate_pct / 100.0,
        }
    }

    /// Apply flag overrides on top of environment configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.data_file {
            config.store.data_file = path.clone();
        }
        if let Some(trials) = self.trials {
            config.simulation.trials = trials;
        }
        if let Some(seed) = self.seed {
            config.simulation.random_seed = Some(seed);
        }
        if self.parallel {
            config.simulation.parallel = true;
        }
        if let Some(threshold) = self.threshold {
            config.policy.approval_threshold = threshold;
        }
    }
}
