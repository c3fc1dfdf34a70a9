//! Error type definitions.
//!
//! This module defines the fatal error types (configuration and initialization) and the
//! recoverable lookup error type, along with the categories used for failure statistics.

use std::time::Duration;

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal configuration errors.
///
/// Any of these aborts the run before a single query is sent, so no partial
/// output is ever produced for a broken configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file {path}: {source}")]
    Io {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("could not parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A record line did not split into exactly `TYPE HOST`.
    #[error("could not parse line: {0}")]
    MalformedRecord(String),

    /// The record type is not one of A, CNAME, MX, TXT.
    #[error("invalid record type: {0}")]
    InvalidRecordType(String),

    /// A nameserver entry is not an `ip:port` socket address.
    #[error("invalid nameserver {0:?}: expected ip:port")]
    InvalidNameserver(String),
}

/// Recoverable failure of a single query against a single nameserver.
///
/// These never abort a run; they are folded into an empty response value.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The query did not complete within its deadline.
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    /// The nameserver answered, but with no records of the requested type.
    #[error("no records found")]
    NoRecords,

    /// Any other resolver failure (NXDOMAIN, SERVFAIL, network, protocol).
    #[error("{0}")]
    Resolve(#[from] ResolveError),
}

/// Categories of lookup failures, used for end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureType {
    Timeout,
    NxDomain,
    NoRecords,
    Network,
    Other,
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::Timeout => "Query timeout",
            FailureType::NxDomain => "Non-existent domain (NXDOMAIN)",
            FailureType::NoRecords => "No records of requested type",
            FailureType::Network => "Network or protocol error",
            FailureType::Other => "Other resolver error",
        }
    }
}
