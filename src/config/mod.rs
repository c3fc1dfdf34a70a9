//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, attempts)
//! - CLI option types and parsing
//! - The TOML configuration file (nameservers and records)

mod constants;
mod file;
mod types;

// Re-export all constants
pub use constants::*;
pub use file::{CompareConfig, Nameserver};
pub use types::{LogFormat, LogLevel, Opt};
