//! Progress logging utilities.

use log::info;

/// Logs progress information about record resolution.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Number of records resolved so far
/// * `total` - Number of records configured
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Resolved {}/{} records in {:.2} seconds (~{:.2} records/sec)",
        completed, total, elapsed_secs, rate
    );
}
