//! Core domain types for the investment evaluator.

pub mod outcome;
pub mod parameters;

pub use outcome::*;
pub use parameters::*;
