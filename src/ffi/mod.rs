//! C FFI layer.
//!
//! This module exports C ABI functions for hosts that load the library
//! through an FFI. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`.
//!
//! The actual logic is in the `evaluator` module. These functions are thin
//! wrappers that handle null checks and map errors to status codes.

pub mod arith;
pub mod status;

pub use arith::{ae_add, ae_divide};
pub use status::ae_status_message;
