//! OTR Common Utilities
//!
//! Shared infrastructure for all OTR metrics crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
