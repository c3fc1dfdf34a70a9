//! dnscompare library: cross-nameserver DNS comparison
//!
//! This library resolves a list of DNS records (A, CNAME, MX, TXT) against several
//! nameservers, each queried directly, and reports for every record whether all
//! nameservers gave the same answer.
//!
//! # Example
//!
//! ```no_run
//! use dnscompare::{run_compare, CompareConfig};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CompareConfig::from_parts(
//!     &["8.8.8.8:53", "1.1.1.1:53"],
//!     &["A example.com", "MX example.com"],
//! )?;
//!
//! let report = run_compare(config, Duration::from_secs(10)).await?;
//! for result in &report.results {
//!     println!("{} {} identical={}", result.record_type, result.host, result.identical);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
mod models;
pub mod output;

// Re-export public API
pub use config::{CompareConfig, LogFormat, LogLevel, Nameserver, Opt};
pub use dns::{DnsLookup, HickoryLookup, LookupTarget, RawAnswer, Record, RecordType};
pub use error_handling::{ConfigError, LookupError};
pub use models::{DnsResponse, DnsResult};
pub use run::{run_compare, run_compare_with, CompareReport};

// Internal run module (wires configuration, lookups and statistics together)
mod run {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::Result;
    use log::info;

    use crate::config::CompareConfig;
    use crate::dns::{DnsLookup, HickoryLookup, ResolverSet};
    use crate::error_handling::{print_failure_statistics, ProcessingStats};
    use crate::models::DnsResult;

    /// Results of a comparison run.
    #[derive(Debug, Clone)]
    pub struct CompareReport {
        /// One result per configured record, in configuration order
        pub results: Vec<DnsResult>,
        /// Number of queries that failed (and were reported as empty values)
        pub failed_queries: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl CompareReport {
        /// Number of records whose nameservers disagree.
        pub fn different_count(&self) -> usize {
            self.results.iter().filter(|r| !r.identical).count()
        }

        /// True when every record compared identical.
        pub fn all_identical(&self) -> bool {
            self.results.iter().all(|r| r.identical)
        }
    }

    /// Runs a comparison using `hickory-resolver` for lookups.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated nameservers and records
    /// * `timeout` - Per-query timeout
    ///
    /// # Errors
    ///
    /// Lookup failures are not errors; they show up as empty response values. The
    /// configuration has already been validated, so this currently always succeeds.
    pub async fn run_compare(config: CompareConfig, timeout: Duration) -> Result<CompareReport> {
        run_compare_with(config, Arc::new(HickoryLookup::new()), timeout).await
    }

    /// Runs a comparison with a caller-supplied lookup capability.
    pub async fn run_compare_with(
        config: CompareConfig,
        lookup: Arc<dyn DnsLookup>,
        timeout: Duration,
    ) -> Result<CompareReport> {
        let start_time = Instant::now();
        let stats = Arc::new(ProcessingStats::new());

        info!(
            "Resolving {} records against {} nameservers",
            config.records.len(),
            config.nameservers.len()
        );

        let resolvers = ResolverSet::new(config.nameservers, lookup)
            .with_timeout(timeout)
            .with_stats(Arc::clone(&stats));
        let results = resolvers.compare(&config.records).await;

        print_failure_statistics(&stats);

        let report = CompareReport {
            results,
            failed_queries: stats.total_failures(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };
        info!(
            "Compared {} records in {:.1}s: {} different",
            report.results.len(),
            report.elapsed_seconds,
            report.different_count()
        );
        Ok(report)
    }
}
