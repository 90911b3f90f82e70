//! Risk Estimator
//!
//! Monte Carlo estimate of the probability that an investment stays
//! net-profitable when growth and expenses deviate from their expected values.

pub mod model;
pub mod simulation;

pub use model::{estimate_risk, MonteCarloRiskModel, RiskModel};
pub use simulation::{
    run_trials, run_trials_parallel, RiskEstimate, SimulationInputs, SimulationTrial,
};
