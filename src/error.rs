//! Error types for the filter bank and its helpers

use thiserror::Error;

/// Result alias used by the filter bank
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors raised by the detectors and streaming filters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A strict classification saw a value outside both level sets
    #[error("value is defined as neither a low nor a high level")]
    InvalidLevel,

    /// Weights (or vector operands) do not have the required shape
    #[error("invalid shape: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    /// A window or weight vector with no elements
    #[error("filter window must hold at least one sample")]
    EmptyWindow,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FilterError {
    /// Create a shape error
    pub fn shape(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Shape {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Errors raised while reading a parameter map
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing required parameter `{0}`")]
    Missing(&'static str),

    #[error("invalid value {value} for parameter `{key}`: {reason}")]
    Invalid {
        key: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors raised by the discrete calculus helpers
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculusError {
    #[error("step width must be non-zero")]
    ZeroStep,
}

/// Errors raised when relinking a reference chain
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ChainError {
    #[error("linking would make the chain point back at itself")]
    Cycle,
}
