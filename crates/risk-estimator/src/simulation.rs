//! Trial loop for the Monte Carlo risk estimate.
//!
//! # Model
//!
//! For each trial:
//! 1. Sample growth `d ~ Normal(D, 0.3 * D)` and expense `e ~ Normal(E, 0.2 * E)`
//! 2. Floor growth at -90% per period
//! 3. Compound revenue over the horizon and compute net gain after tax
//! 4. The trial succeeds when the investor's share of net gain is positive
//!
//! Draws are taken as `mean + scale * mean * z` with `z ~ N(0, 1)`, so a zero
//! mean gives a deterministic sample and a negative mean uses its magnitude as
//! the spread.

use invest_core::finance::{net_gain, revenue_at_horizon};
use invest_core::InvestmentParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Growth standard deviation as a fraction of expected growth.
pub const GROWTH_VOLATILITY: f64 = 0.3;

/// Expense standard deviation as a fraction of expected expenses.
pub const EXPENSE_VOLATILITY: f64 = 0.2;

/// Lowest per-period growth a sampled trial can take.
pub const GROWTH_FLOOR: f64 = -0.9;

/// Trials evaluated by each rayon task in parallel mode.
const PARALLEL_CHUNK: usize = 256;

/// Parameters the simulation perturbs and evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub primary_revenue: f64,
    pub growth_rate: f64,
    pub expenses: f64,
    pub tax_rate: f64,
    pub investor_share: f64,
    pub horizon: u32,
}

impl From<&InvestmentParameters> for SimulationInputs {
    fn from(params: &InvestmentParameters) -> Self {
        Self {
            primary_revenue: params.primary_revenue(),
            growth_rate: params.growth_rate(),
            expenses: params.expenses(),
            tax_rate: params.tax_rate(),
            investor_share: params.investor_share(),
            horizon: params.horizon(),
        }
    }
}

/// One sampled scenario and whether the investor came out ahead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationTrial {
    pub sampled_growth: f64,
    pub sampled_expense: f64,
    pub net_gain: f64,
    pub profitable: bool,
}

impl SimulationTrial {
    /// Draw a single trial from `rng`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, inputs: &SimulationInputs) -> Self {
        let z_growth: f64 = StandardNormal.sample(rng);
        let z_expense: f64 = StandardNormal.sample(rng);

        let sampled_growth = inputs.growth_rate + GROWTH_VOLATILITY * inputs.growth_rate * z_growth;
        let sampled_expense = inputs.expenses + EXPENSE_VOLATILITY * inputs.expenses * z_expense;

        Self::evaluate(inputs, sampled_growth, sampled_expense)
    }

    /// Score a trial for an already sampled growth and expense pair.
    pub fn evaluate(inputs: &SimulationInputs, sampled_growth: f64, sampled_expense: f64) -> Self {
        let effective_growth = sampled_growth.max(GROWTH_FLOOR);
        let revenue = revenue_at_horizon(inputs.primary_revenue, effective_growth, inputs.horizon);
        let net_gain = net_gain(
            revenue,
            inputs.primary_revenue,
            sampled_expense,
            inputs.horizon,
            inputs.tax_rate,
        );

        Self {
            sampled_growth,
            sampled_expense,
            net_gain,
            profitable: inputs.investor_share * net_gain > 0.0,
        }
    }
}

/// Outcome tally of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEstimate {
    pub successes: usize,
    pub trials: usize,
}

impl RiskEstimate {
    /// Fraction of successful trials, 0.0 when no trials ran.
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.successes as f64 / self.trials as f64
    }

    fn merge(self, other: Self) -> Self {
        Self {
            successes: self.successes + other.successes,
            trials: self.trials + other.trials,
        }
    }
}

/// Run `trials` independent trials drawing from `rng`.
pub fn run_trials<R: Rng + ?Sized>(
    rng: &mut R,
    inputs: &SimulationInputs,
    trials: usize,
) -> RiskEstimate {
    let successes = (0..trials)
        .filter(|_| SimulationTrial::draw(rng, inputs).profitable)
        .count();

    RiskEstimate { successes, trials }
}

/// Run `trials` across the rayon pool.
///
/// Chunk `i` draws from a generator seeded with `seed` and `i`, so a given
/// seed always yields the same estimate regardless of thread scheduling.
pub fn run_trials_parallel(seed: u64, inputs: &SimulationInputs, trials: usize) -> RiskEstimate {
    let chunks = trials.div_ceil(PARALLEL_CHUNK);

    (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * PARALLEL_CHUNK;
            let len = PARALLEL_CHUNK.min(trials - start);
            let mut rng = StdRng::seed_from_u64(chunk_seed(seed, chunk));
            run_trials(&mut rng, inputs, len)
        })
        .reduce(
            || RiskEstimate {
                successes: 0,
                trials: 0,
            },
            RiskEstimate::merge,
        )
}

fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
