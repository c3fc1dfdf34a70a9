// Shared test helpers: a scripted lookup capability and config file setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io::Write;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dnscompare::{DnsLookup, LookupError, LookupTarget, RawAnswer, Record, RecordType};
use tempfile::NamedTempFile;

/// How a scripted nameserver responds.
#[derive(Clone)]
#[allow(dead_code)] // Not every test file uses every behavior
pub enum Behavior {
    Answer(RawAnswer),
    Fail,
    Hang,
}

/// A `DnsLookup` keyed by `(endpoint, record type, host)`; anything unscripted fails.
#[derive(Default)]
pub struct FakeLookup {
    answers: HashMap<(String, RecordType, String), Behavior>,
}

#[allow(dead_code)] // Used by other test files
impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: &str, record: &str, behavior: Behavior) -> Self {
        let record = dnscompare::dns::parse_record(record).expect("valid record line");
        self.answers.insert(
            (endpoint.to_string(), record.record_type, record.host),
            behavior,
        );
        self
    }

    pub fn build(self) -> Arc<dyn DnsLookup> {
        Arc::new(self)
    }
}

#[async_trait]
impl DnsLookup for FakeLookup {
    async fn lookup(
        &self,
        target: &LookupTarget,
        record: &Record,
    ) -> Result<RawAnswer, LookupError> {
        let key = (
            target.nameserver.as_str().to_string(),
            record.record_type,
            record.host.clone(),
        );
        match self.answers.get(&key) {
            Some(Behavior::Answer(raw)) => Ok(raw.clone()),
            Some(Behavior::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(LookupError::NoRecords)
            }
            Some(Behavior::Fail) | None => Err(LookupError::NoRecords),
        }
    }
}

/// Builds an A/AAAA style answer from address strings.
#[allow(dead_code)] // Used by other test files
pub fn addresses(addrs: &[&str]) -> RawAnswer {
    RawAnswer::Addresses(
        addrs
            .iter()
            .map(|a| a.parse::<IpAddr>().expect("valid ip"))
            .collect(),
    )
}

/// Writes `contents` to a temporary `.toml` file.
#[allow(dead_code)] // Used by other test files
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config file");
    file.flush().expect("Failed to flush temp config file");
    file
}
