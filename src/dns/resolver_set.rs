//! Querying every nameserver for every record.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use log::{debug, warn};

use crate::app::log_progress;
use crate::config::{Nameserver, DNS_TIMEOUT};
use crate::dns::compare::are_responses_identical;
use crate::dns::lookup::{DnsLookup, LookupTarget};
use crate::dns::normalize::normalize;
use crate::dns::record::Record;
use crate::error_handling::{update_failure_stats, LookupError, ProcessingStats};
use crate::models::{DnsResponse, DnsResult};

/// The configured nameservers, in order, plus the capability used to query them.
pub struct ResolverSet {
    nameservers: Vec<Nameserver>,
    lookup: Arc<dyn DnsLookup>,
    timeout: Duration,
    stats: Arc<ProcessingStats>,
}

impl ResolverSet {
    pub fn new(nameservers: Vec<Nameserver>, lookup: Arc<dyn DnsLookup>) -> Self {
        Self {
            nameservers,
            lookup,
            timeout: DNS_TIMEOUT,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Overrides the per-query timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shares an existing statistics tracker instead of a private one.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Queries one nameserver. Never fails: any error becomes an empty value.
    async fn query(&self, nameserver: &Nameserver, record: &Record) -> DnsResponse {
        let target = LookupTarget {
            nameserver: nameserver.clone(),
            timeout: self.timeout,
        };

        let answer = match tokio::time::timeout(self.timeout, self.lookup.lookup(&target, record))
            .await
        {
            Ok(answer) => answer,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        };

        if let Err(e) = &answer {
            warn!(
                "{} lookup for {} via {} failed: {e}",
                record.record_type, record.host, nameserver
            );
            update_failure_stats(&self.stats, e);
        }

        let value = normalize(&answer);
        debug!(
            "{} {} via {} -> {:?}",
            record.record_type, record.host, nameserver, value
        );
        DnsResponse {
            resolver: nameserver.to_string(),
            value,
        }
    }

    /// Queries every nameserver concurrently for one record.
    ///
    /// The returned responses follow nameserver configuration order, whatever order
    /// the queries complete in.
    pub async fn resolve(&self, record: &Record) -> Vec<DnsResponse> {
        join_all(
            self.nameservers
                .iter()
                .map(|nameserver| self.query(nameserver, record)),
        )
        .await
    }

    /// Resolves one record and compares the answers.
    pub async fn resolve_record(&self, record: &Record) -> DnsResult {
        let responses = self.resolve(record).await;
        let identical = are_responses_identical(&responses);
        DnsResult {
            record_type: record.record_type,
            host: record.host.clone(),
            responses,
            identical,
        }
    }

    /// Resolves every record, one after another, in configuration order.
    pub async fn compare(&self, records: &[Record]) -> Vec<DnsResult> {
        let start_time = Instant::now();
        let mut results = Vec::with_capacity(records.len());
        for record in records {
            results.push(self.resolve_record(record).await);
            log_progress(start_time, results.len(), records.len());
        }
        results
    }
}
