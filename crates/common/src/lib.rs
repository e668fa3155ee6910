//! Spaceprobe Common Utilities
//!
//! Shared infrastructure for all Spaceprobe crates:
//! - Error types and result aliases
//! - Poll timing for repeated desktop-state reads
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
