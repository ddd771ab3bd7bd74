//! traces/mod.rs
//! Sample packing: traces -> the raw trace block that follows the headers.
//!
//! Notes:
//! - Integer samples are big-endian and zero-left-padded to the sample width.
//! - Float samples keep their little-endian IEEE-754 bytes.
//! - Per-trace extra data precedes each trace's samples.

pub mod types;
pub mod pack;

pub use types::*;
pub use pack::*;
