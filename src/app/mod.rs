//! Main application modules.
//!
//! This module provides progress logging used while records are resolved.

pub mod logging;

// Re-export public API
pub use logging::log_progress;
