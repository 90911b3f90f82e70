//! Investment Intelligence: rule-based investment approval with Monte Carlo risk
//!
//! This is the root crate that provides benchmark and integration-test access to
//! the internal crates. For actual functionality, use the individual crates directly:
//!
//! - `invest-core`: Parameters, outcomes, financial formulas, configuration
//! - `risk-estimator`: Monte Carlo success-probability estimation
//! - `evaluation-engine`: Projection and the ordered approval gates
//! - `history-store`: Append-only CSV history of approved investments
//! - `invest-cli`: Command-line front end

// Re-export for benchmarks
pub use evaluation_engine as evaluation;
pub use history_store as history;
pub use invest_core as core;
pub use risk_estimator as risk;
