//! Error types for the planning engine.

use thiserror::Error;

/// Top-level engine error.
///
/// Every error is a contract violation reported synchronously to the
/// immediate caller; the engine never substitutes silent defaults for
/// invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Malformed input: empty questionnaire, inconsistent weights,
    /// non-positive counts, negative contributions, past target dates.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A computation that would produce NaN or infinity, e.g. a ratio
    /// against a zero denominator.
    #[error("Arithmetic domain error: {0}")]
    ArithmeticDomain(String),

    /// The caller cancelled a simulation before it completed. No partial
    /// result is returned.
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl EngineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }

    pub fn arithmetic(msg: impl Into<String>) -> Self {
        EngineError::ArithmeticDomain(msg.into())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
