//! Core types shared across rollcall facilities
//!
//! Holds the canonical field keys and event names used by the logging
//! facility, so every crate emits the same structured shape.

pub mod schema;
