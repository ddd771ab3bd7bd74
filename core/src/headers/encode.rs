//! headers/encode.rs
//!
//! TLV length field and record encoding.
//!
//! Design notes:
//! - Lengths up to 127 use one byte.
//! - Longer values use the extended form: `0x80 | k`, then k length bytes,
//!   little-endian with trailing zeros trimmed (130 -> `81 82`).
//! - The trace block marker record is always `5f 00`.

use byteorder::{ByteOrder, LittleEndian};

use crate::codec::trim_trailing_zeros;
use crate::constants::{tags, EXTENDED_LENGTH_FLAG, SHORT_LENGTH_MAX};
use crate::headers::types::HeaderEntry;

/// Encode the length field for a value of `len` bytes.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len <= SHORT_LENGTH_MAX {
        return vec![len as u8];
    }

    let mut raw = [0u8; 8];
    LittleEndian::write_u64(&mut raw, len as u64);
    let digits = trim_trailing_zeros(raw.to_vec());

    let mut out = Vec::with_capacity(1 + digits.len());
    // At most 8 length bytes, so k always fits the low 7 bits.
    out.push(EXTENDED_LENGTH_FLAG | digits.len() as u8);
    out.extend_from_slice(&digits);
    out
}

/// Append one header record to `out`.
#[inline]
pub fn encode_record(entry: &HeaderEntry, out: &mut Vec<u8>) {
    out.push(entry.tag);
    out.extend_from_slice(&entry.length);
    out.extend_from_slice(&entry.value);
}

/// Append the trace block marker record to `out`.
#[inline]
pub fn encode_trace_block_marker(out: &mut Vec<u8>) {
    out.push(tags::TRACE_BLOCK_MARKER);
    out.push(0x00);
}
