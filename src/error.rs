//! Error type shared by the evaluator and the C ABI layer.

use thiserror::Error;

/// Status code returned by C ABI functions on success.
pub const AE_OK: i32 = 0;
/// Status code returned when a required pointer argument is null.
pub const AE_ERR_NULL_POINTER: i32 = 1;
/// Status code returned when a divisor is zero.
pub const AE_ERR_DIVISION_BY_ZERO: i32 = 2;

/// Errors produced by arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
}

impl ArithError {
    /// The C status code for this error.
    pub fn code(&self) -> i32 {
        match self {
            ArithError::DivisionByZero => AE_ERR_DIVISION_BY_ZERO,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArithError>;
