//! telemetry/counters.rs
//! Mutable counters used while a frame stream is processed.
//!
//! Summary: Collects frame counts and byte counts for one `process_stream` call.
//! Converted into an immutable TelemetrySnapshot when the stream finishes.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub frames_control: u64,
    pub frames_control_sent: u64,
    pub frames_data: u64,
    pub messages_delivered: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one control frame read.
    /// - `frame_len`: full encoded length (escape + length field + body)
    pub fn add_control(&mut self, frame_len: usize) {
        self.frames_control += 1;
        self.bytes_overhead += frame_len as u64;
    }

    /// Record one control frame written back to the peer.
    pub fn add_control_sent(&mut self) {
        self.frames_control_sent += 1;
    }

    /// Record one data frame read.
    /// - `payload_len`: payload bytes handed to the decoder
    /// - `frame_overhead_len`: length prefix bytes
    pub fn add_data(&mut self, payload_len: usize, frame_overhead_len: usize) {
        self.frames_data += 1;
        self.bytes_payload += payload_len as u64;
        self.bytes_overhead += frame_overhead_len as u64;
    }

    pub fn add_delivered(&mut self) {
        self.messages_delivered += 1;
    }

    /// Total bytes consumed from the stream.
    pub fn bytes_total(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.frames_control += other.frames_control;
        self.frames_control_sent += other.frames_control_sent;
        self.frames_data += other.frames_data;
        self.messages_delivered += other.messages_delivered;
        self.bytes_payload += other.bytes_payload;
        self.bytes_overhead += other.bytes_overhead;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
