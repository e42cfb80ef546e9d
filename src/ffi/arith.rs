//! Addition and division entry points.

use crate::error::{AE_ERR_NULL_POINTER, AE_OK};
use crate::evaluator;

/// Adds two integers. Overflow wraps around.
#[no_mangle]
pub extern "C" fn ae_add(a: i32, b: i32) -> i32 {
    evaluator::add(a, b)
}

/// Divides `a` by `b` and writes the quotient to `out`.
///
/// # Safety
/// - `out` must be a valid, writable pointer to an `f64`, or null
///
/// # Returns
/// 0 on success, 1 if `out` is null, 2 if `b` is zero.
/// `*out` is only written on success.
#[no_mangle]
pub unsafe extern "C" fn ae_divide(a: i32, b: i32, out: *mut f64) -> i32 {
    if out.is_null() {
        return AE_ERR_NULL_POINTER;
    }

    match evaluator::divide(a, b) {
        Ok(quotient) => {
            *out = quotient;
            AE_OK
        }
        Err(err) => err.code(),
    }
}
