//! headers/mod.rs
//! TLV header records for the trace-set container.
//!
//! Notes:
//! - Records render in ascending tag order, followed by the `5f 00` marker.
//! - Length fields use the one-byte form up to 127 bytes, the extended
//!   `0x80 | k` form beyond that.
//! - External clock headers are gated on earlier headers; see `store.rs`.

pub mod types;
pub mod encode;
pub mod store;

pub use types::*;
pub use encode::*;
pub use store::*;
