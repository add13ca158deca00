//! Run metrics.

use std::time::Duration;

/// Counters collected over one run of the generator loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    /// Completed generate → encode → publish/print cycles.
    pub iterations: u64,
    /// Records acknowledged by the broker.
    pub published: u64,
    /// Sends that failed or were not acknowledged in time.
    pub publish_failures: u64,
    /// Events whose encoding failed and were sent as empty payloads.
    pub encode_failures: u64,
    /// Lines written to the inspection output.
    pub inspected: u64,
    /// Payloads that could not be rendered or written during a dry run.
    pub inspect_failures: u64,
    /// Total time taken, including inter-event delays.
    pub total_duration: Duration,
}

impl RunMetrics {
    /// Calculate events per second.
    pub fn events_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.iterations as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
