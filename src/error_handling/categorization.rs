//! Lookup error categorization.
//!
//! Maps resolver failures onto the coarse `FailureType` buckets reported at the end of
//! a run.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::stats::ProcessingStats;
use super::types::{FailureType, LookupError};

/// Categorizes a `LookupError` into a `FailureType`.
pub fn categorize_lookup_error(error: &LookupError) -> FailureType {
    match error {
        LookupError::Timeout(_) => FailureType::Timeout,
        LookupError::NoRecords => FailureType::NoRecords,
        LookupError::Resolve(e) => categorize_resolve_error(e),
    }
}

/// Categorizes a `hickory_resolver` error.
///
/// An empty answer with `NXDOMAIN` is reported separately from an empty answer for an
/// existing name, even though both end up as the same empty response value.
pub fn categorize_resolve_error(error: &ResolveError) -> FailureType {
    match error.kind() {
        ResolveErrorKind::Timeout => FailureType::Timeout,
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                FailureType::NxDomain
            } else {
                FailureType::NoRecords
            }
        }
        ResolveErrorKind::Io(_) | ResolveErrorKind::Proto(_) | ResolveErrorKind::NoConnections => {
            FailureType::Network
        }
        _ => FailureType::Other,
    }
}

/// Records a lookup failure in the statistics.
pub fn update_failure_stats(stats: &ProcessingStats, error: &LookupError) {
    stats.increment_failure(categorize_lookup_error(error));
}
