//! Error types for the investment evaluation system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("History store error: {message}")]
    History { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter { field: &'static str, message: String },

    #[error("Projection produced a non-finite {field}: {value}")]
    NonFiniteProjection { field: &'static str, value: f64 },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Whether this error stems from caller input rather than a runtime failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
