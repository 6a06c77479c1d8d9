//! Command orchestration layer.

pub mod demo;
pub mod directory;
