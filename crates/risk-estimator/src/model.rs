//! Risk models consumed by the evaluation pipeline.

use crate::simulation::{run_trials, run_trials_parallel, RiskEstimate, SimulationInputs};
use invest_core::config::{SimulationConfig, DEFAULT_TRIALS};
use invest_core::{InvestmentParameters, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Source of success-probability estimates for an investment.
pub trait RiskModel {
    fn estimate(&self, params: &InvestmentParameters) -> RiskEstimate;
}

impl<M: RiskModel + ?Sized> RiskModel for &M {
    fn estimate(&self, params: &InvestmentParameters) -> RiskEstimate {
        (**self).estimate(params)
    }
}

/// Monte Carlo risk model.
///
/// Holds no state between estimates: every call builds its own generator,
/// from the configured seed when one is set and from OS entropy otherwise.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloRiskModel {
    config: SimulationConfig,
}

impl MonteCarloRiskModel {
    /// Create a model from simulation settings.
    ///
    /// A trial count of zero is raised to one; callers that must reject it
    /// run [`SimulationConfig::validate`] first.
    pub fn new(mut config: SimulationConfig) -> Self {
        config.trials = config.trials.max(1);
        Self { config }
    }

    /// Model that reproduces the same estimate for the same inputs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimulationConfig::seeded(seed))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Estimate directly from simulation inputs.
    pub fn estimate_inputs(&self, inputs: &SimulationInputs) -> RiskEstimate {
        let trials = self.config.trials;
        let estimate = if self.config.parallel {
            let seed = self
                .config
                .random_seed
                .unwrap_or_else(|| rand::thread_rng().gen());
            run_trials_parallel(seed, inputs, trials)
        } else {
            let mut rng = match self.config.random_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            run_trials(&mut rng, inputs, trials)
        };

        debug!(
            trials,
            successes = estimate.successes,
            probability = estimate.probability(),
            parallel = self.config.parallel,
            "Risk simulation complete"
        );

        estimate
    }
}

impl RiskModel for MonteCarloRiskModel {
    fn estimate(&self, params: &InvestmentParameters) -> RiskEstimate {
        self.estimate_inputs(&SimulationInputs::from(params))
    }
}

/// Probability that the investor's share of net gain stays positive.
///
/// Runs [`DEFAULT_TRIALS`] trials when `trials` is `None`, with fresh entropy
/// on every call. `Some(0)` is a configuration error.
pub fn estimate_risk(
    primary_revenue: f64,
    growth_rate: f64,
    expenses: f64,
    tax_rate: f64,
    investor_share: f64,
    horizon: u32,
    trials: Option<usize>,
) -> Result<f64> {
    let config = SimulationConfig {
        trials: trials.unwrap_or(DEFAULT_TRIALS),
        ..Default::default()
    };
    config.validate()?;

    let inputs = SimulationInputs {
        primary_revenue,
        growth_rate,
        expenses,
        tax_rate,
        investor_share,
        horizon,
    };
    let model = MonteCarloRiskModel::new(config);

    Ok(model.estimate_inputs(&inputs).probability())
}
