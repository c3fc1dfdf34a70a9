//! Lookup failure statistics.
//!
//! This module provides thread-safe counters for lookup failures, shared by every
//! concurrent query of a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureType;

/// Thread-safe lookup failure tracker.
///
/// One atomic counter per `FailureType`, all initialized to zero on creation, so the
/// tracker can be shared across tasks using `Arc` without locking.
pub struct ProcessingStats {
    failures: HashMap<FailureType, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in FailureType::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }

        ProcessingStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment_failure(&self, failure: FailureType) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                failure
            );
        }
    }

    /// Get the count for a failure type.
    pub fn get_failure_count(&self, failure: FailureType) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total failure count across all failure types.
    pub fn total_failures(&self) -> usize {
        FailureType::iter().map(|f| self.get_failure_count(f)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs failure counts, skipping categories that never occurred.
pub fn print_failure_statistics(stats: &ProcessingStats) {
    let total = stats.total_failures();
    if total == 0 {
        return;
    }

    log::info!("Lookup failure counts ({} total):", total);
    for failure_type in FailureType::iter() {
        let count = stats.get_failure_count(failure_type);
        if count > 0 {
            log::info!("   {}: {}", failure_type.as_str(), count);
        }
    }
}
