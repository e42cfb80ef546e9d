//! Human-readable status code descriptions.

use std::os::raw::c_char;

use crate::error::{AE_ERR_DIVISION_BY_ZERO, AE_ERR_NULL_POINTER, AE_OK};

/// Returns a static NUL-terminated description of a status code.
///
/// The pointer is never null and must not be freed.
#[no_mangle]
pub extern "C" fn ae_status_message(code: i32) -> *const c_char {
    let msg: &'static [u8] = match code {
        AE_OK => b"ok\0",
        AE_ERR_NULL_POINTER => b"null pointer\0",
        AE_ERR_DIVISION_BY_ZERO => b"division by zero\0",
        _ => b"unknown status\0",
    };
    msg.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithError;
    use std::ffi::CStr;

    fn message(code: i32) -> &'static str {
        unsafe { CStr::from_ptr(ae_status_message(code)) }
            .to_str()
            .unwrap()
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(message(AE_OK), "ok");
        assert_eq!(message(AE_ERR_NULL_POINTER), "null pointer");
        assert_eq!(message(AE_ERR_DIVISION_BY_ZERO), "division by zero");
    }

    #[test]
    fn test_matches_error_display() {
        let err = ArithError::DivisionByZero;
        assert_eq!(message(err.code()), err.to_string());
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(message(-1), "unknown status");
        assert_eq!(message(42), "unknown status");
    }
}
