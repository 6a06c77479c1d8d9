//! rollcall engine - orchestration layer
//!
//! `EventGuestDirectory` wraps any `DirectoryBackend` and owns the
//! operation-boundary logging; `demo` seeds the sample data and runs every
//! directory operation once.

pub mod commands;

pub use commands::demo::{run_demo, run_demo_fresh, seed_demo, DemoReport, DemoSeed};
pub use commands::directory::EventGuestDirectory;
