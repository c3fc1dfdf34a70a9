//! Configuration constants.
//!
//! Defaults for query behavior. The CLI can override the timeout; everything else is
//! fixed.

use std::time::Duration;

/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;
/// Per-query timeout as a `Duration`
pub const DNS_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS);
/// Attempts per query. A failed or timed-out query is never retried.
pub const DNS_ATTEMPTS: usize = 1;
/// Longest CNAME chain followed before giving up
pub const MAX_CNAME_HOPS: usize = 16;
/// Marker printed by the text output in place of an empty value
pub const EMPTY_VALUE_MARKER: &str = "EMPTY";
