//! telemetry/mod.rs
//! Serializable snapshots of serialiser state for logs and reports.

pub mod snapshot;

pub use snapshot::*;
