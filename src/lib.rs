//! Arith Eval - Integer Arithmetic Library
//!
//! Integer addition and true (floating-point) division, usable from Rust
//! directly or through a C ABI.
//!
//! ```
//! use arith_eval::{add, divide, ArithError};
//!
//! assert_eq!(add(-1, 5), 4);
//! assert_eq!(divide(7, 2), Ok(3.5));
//! assert_eq!(divide(5, 0), Err(ArithError::DivisionByZero));
//! ```

pub mod error;
pub mod evaluator;
pub mod ffi;


pub use error::{ArithError, Result};
pub use evaluator::{add, divide};
