//! Investment Core Library
//!
//! Shared types, errors, and configuration for the investment evaluation system.

pub mod config;
pub mod error;
pub mod finance;
pub mod types;

pub use error::{Error, Result};
pub use types::{Approval, EvaluationResult, InvestmentParameters, ParameterInput, RejectionReason};
