use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;

/// Immutable summary of one processed frame stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub frames_control: u64,
    pub frames_control_sent: u64,
    pub frames_data: u64,
    pub messages_delivered: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
    pub throughput_payload_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, elapsed: Duration) -> Self {
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_payload as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            frames_control: counters.frames_control,
            frames_control_sent: counters.frames_control_sent,
            frames_data: counters.frames_data,
            messages_delivered: counters.messages_delivered,
            bytes_payload: counters.bytes_payload,
            bytes_overhead: counters.bytes_overhead,
            throughput_payload_bytes_per_sec: throughput,
            elapsed,
        }
    }

    pub fn bytes_total(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }

    /// Every data frame read was delivered.
    pub fn sanity_check(&self) -> bool {
        self.messages_delivered == self.frames_data
    }
}
