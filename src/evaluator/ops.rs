//! Integer addition and true division.

use crate::error::{ArithError, Result};

/// Add two integers.
///
/// Overflow wraps around (two's complement) instead of panicking.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Divide `a` by `b`, returning the real-valued quotient.
///
/// Both operands are widened to `f64` first, so `divide(7, 2)` is `3.5`
/// rather than `3`. Every `i32` is exact in `f64`.
///
/// # Errors
/// Returns [`ArithError::DivisionByZero`] when `b` is zero.
pub fn divide(a: i32, b: i32) -> Result<f64> {
    if b == 0 {
        log::debug!("rejected division of {} by zero", a);
        return Err(ArithError::DivisionByZero);
    }

    Ok(f64::from(a) / f64::from(b))
}
