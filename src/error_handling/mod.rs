//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions (fatal configuration/initialization errors and recoverable
//!   lookup errors)
//! - Categorization of resolver failures
//! - Thread-safe failure counters
//!
//! Only configuration and initialization errors abort a run. Lookup errors are counted
//! here and otherwise absorbed into an empty response value.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_lookup_error, categorize_resolve_error, update_failure_stats};
pub use stats::{print_failure_statistics, ProcessingStats};
pub use types::{ConfigError, FailureType, InitializationError, LookupError};
