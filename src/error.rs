// error.rs

use thiserror::Error;

use crate::operation::Operation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid argument: division by zero ({dividend} / 0)")]
    DivisionByZero { dividend: i64 },

    #[error("integer overflow: {a} {operation} {b}")]
    Overflow { operation: Operation, a: i64, b: i64 },
}

impl CalcError {
    /// True for errors caused by a bad operand rather than by the result.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalcError::DivisionByZero { .. })
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown overflow policy: {0:?} (expected checked, wrapping or saturating)")]
    UnknownOverflowPolicy(String),
}
