//! telemetry/snapshot.rs
//!
//! Immutable summary of a serialiser's state.
//!
//! Design notes:
//! - Taken on demand; nothing is counted while building.
//! - `header_bytes` includes the `5f 00` marker record, so
//!   `header_bytes + trace_bytes == total_bytes` always holds.

use serde::{Deserialize, Serialize};

use crate::serialiser::Serialiser;
use crate::traces::{Sample, TraceLayout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialiserSnapshot {
    pub trace_count: u64,
    pub samples_per_trace: u64,
    pub sample_width: u8,
    pub sample_coding: u8,
    pub is_float: bool,
    pub layout: TraceLayout,
    pub extra_data_len: Option<u64>,
    pub header_count: u64,
    pub header_bytes: u64,
    pub trace_bytes: u64,
    pub total_bytes: u64,
}

impl SerialiserSnapshot {
    pub fn from<T: Sample>(serialiser: &Serialiser<T>) -> Self {
        let coding = serialiser.sample_coding();
        let header_bytes = serialiser.headers().encoded_len() as u64;
        let trace_bytes = serialiser.trace_bytes().len() as u64;

        Self {
            trace_count: serialiser.trace_count() as u64,
            samples_per_trace: serialiser.samples_per_trace() as u64,
            sample_width: serialiser.sample_width().get(),
            sample_coding: coding.raw(),
            is_float: coding.is_float(),
            layout: serialiser.layout(),
            extra_data_len: serialiser.extra_data_len().map(|len| len as u64),
            header_count: serialiser.headers().len() as u64,
            header_bytes,
            trace_bytes,
            total_bytes: header_bytes + trace_bytes,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: Sample> Serialiser<T> {
    pub fn snapshot(&self) -> SerialiserSnapshot {
        SerialiserSnapshot::from(self)
    }
}
