//! Cross-resolver comparison.

use crate::models::DnsResponse;

/// Returns true when the response from all resolvers is identical.
///
/// Exact string comparison: case and trailing dots count as differences.
pub fn are_responses_identical(responses: &[DnsResponse]) -> bool {
    let Some(first) = responses.first() else {
        return true;
    };
    responses.iter().all(|r| r.value == first.value)
}
