//! Configuration management for the investment evaluator.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default number of Monte Carlo trials per estimate.
pub const DEFAULT_TRIALS: usize = 1000;

/// Default minimum success probability required for approval.
pub const DEFAULT_APPROVAL_THRESHOLD: f64 = 0.85;

/// Default location of the approved-investment history file.
pub const DEFAULT_DATA_FILE: &str = "investment_ml_data.csv";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub simulation: SimulationConfig,
    pub policy: PolicyConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_file: PathBuf,
}

/// Monte Carlo simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of trials per estimate (at least 1).
    pub trials: usize,
    /// Fixed seed; `None` draws fresh entropy on every estimate.
    pub random_seed: Option<u64>,
    /// Spread trials across the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            random_seed: None,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Seeded configuration, used for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::Config {
                message: "simulation trials must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Approval policy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum risk success probability for approval (0.0 to 1.0).
    pub approval_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.approval_threshold) {
            return Err(Error::Config {
                message: format!(
                    "approval threshold must be within [0, 1], got {}",
                    self.approval_threshold
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency label appended to monetary amounts.
    pub currency: String,
    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "ETB".to_string(),
            log_json: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                data_file: PathBuf::from(DEFAULT_DATA_FILE),
            },
            simulation: SimulationConfig::default(),
            policy: PolicyConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            store: StoreConfig {
                data_file: env::var("INVEST_DATA_FILE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.store.data_file),
            },
            simulation: SimulationConfig {
                trials: parse_var("INVEST_SIM_TRIALS")?.unwrap_or(DEFAULT_TRIALS),
                random_seed: parse_var("INVEST_SIM_SEED")?,
                parallel: flag_var("INVEST_SIM_PARALLEL"),
            },
            policy: PolicyConfig {
                approval_threshold: parse_var("INVEST_APPROVAL_THRESHOLD")?
                    .unwrap_or(DEFAULT_APPROVAL_THRESHOLD),
            },
            display: DisplayConfig {
                currency: env::var("INVEST_CURRENCY").unwrap_or(defaults.display.currency),
                log_json: flag_var("INVEST_LOG_JSON"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.policy.validate()
    }
}

/// Boolean switch: set to `true` or `1` to enable.
fn flag_var(name: &str) -> bool {
    env::var(name)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

/// Parse an optional environment variable, failing on malformed values.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|e| Error::Config {
            message: format!("{name} has an invalid value {raw:?}: {e}"),
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.trials, 1000);
        assert_eq!(config.simulation.random_seed, None);
        assert!(!config.simulation.parallel);
        assert_eq!(config.policy.approval_threshold, 0.85);
        assert_eq!(config.store.data_file, PathBuf::from("investment_ml_data.csv"));
        assert_eq!(config.display.currency, "ETB");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let config = SimulationConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let policy = PolicyConfig {
            approval_threshold: 1.5,
        };
        assert!(policy.validate().is_err());

        let policy = PolicyConfig {
            approval_threshold: -0.1,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_seeded_simulation_config() {
        let config = SimulationConfig::seeded(7);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.trials, DEFAULT_TRIALS);
    }
}
