//! Structured logging facility for rollcall
//!
//! - Single initialization point via `init(profile)`
//! - Operation boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for asserting on emitted events
//!
//! # Usage
//!
//! ```rust
//! use rollcall_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Boundary macros are owned by the engine layer. Backends log internal
//! details with `tracing::debug!` only.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
