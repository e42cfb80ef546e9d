//! Core arithmetic logic.
//!
//! This module contains the actual operations. The FFI layer in `ffi/`
//! calls these functions.

pub mod ops;

pub use ops::{add, divide};
