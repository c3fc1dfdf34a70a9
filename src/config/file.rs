//! Configuration file loading.
//!
//! The configuration file is TOML with two string arrays:
//!
//! ```toml
//! nameservers = ["8.8.8.8:53", "1.1.1.1:53"]
//! records = ["A example.com", "MX example.com"]
//! ```
//!
//! Every entry is validated while loading. A bad record line or nameserver is a fatal
//! `ConfigError`, reported before any query is sent.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::dns::{parse_record, Record};
use crate::error_handling::ConfigError;

/// A nameserver queried directly, bypassing system resolver configuration.
///
/// Keeps the endpoint exactly as configured, since that string is what gets reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nameserver {
    endpoint: String,
    addr: SocketAddr,
}

impl Nameserver {
    /// The endpoint as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.endpoint
    }

    /// The parsed socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl FromStr for Nameserver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let endpoint = s.trim();
        let addr = endpoint
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidNameserver(s.to_string()))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            addr,
        })
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.endpoint)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    nameservers: Vec<String>,
    #[serde(default)]
    records: Vec<String>,
}

/// Validated run configuration: nameservers and records, both in configuration order.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub nameservers: Vec<Nameserver>,
    pub records: Vec<Record>,
}

impl CompareConfig {
    /// Builds a configuration from already-loaded nameserver and record strings.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` encountered, checking nameservers first and
    /// then records in order.
    pub fn from_parts<N, R>(nameservers: &[N], records: &[R]) -> Result<Self, ConfigError>
    where
        N: AsRef<str>,
        R: AsRef<str>,
    {
        let nameservers = nameservers
            .iter()
            .map(|ns| ns.as_ref().parse::<Nameserver>())
            .collect::<Result<Vec<_>, _>>()?;
        let records = records
            .iter()
            .map(|line| parse_record(line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if nameservers.is_empty() {
            log::warn!("No nameservers configured; every record will compare as identical");
        }
        if records.is_empty() {
            log::warn!("No records configured; nothing to resolve");
        }

        Ok(Self {
            nameservers,
            records,
        })
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents)?;
        Self::from_parts(&raw.nameservers, &raw.records)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded config file {}", path.display());
        Self::from_toml_str(&contents)
    }
}
