//! Error types for decimal values

use thiserror::Error;

/// Decimal errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    // Arithmetic errors
    #[error("Decimal overflow: result does not fit in 96 bits")]
    Overflow,

    #[error("Division by zero")]
    DivisionByZero,

    // Construction errors
    #[error("Cannot parse '{input}' as a decimal: {reason}")]
    Parse { input: String, reason: String },

    #[error("Not a finite number: {0}")]
    NotFinite(String),

    #[error("Invalid scale {0}: at most 28 fractional digits")]
    InvalidScale(u32),
}

/// Result type for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
