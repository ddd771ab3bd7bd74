//! Minimal TLV reader used as a test oracle.
//!
//! Parses `tag, length-field, value` records up to the `5f 00` marker and
//! returns everything after it as the trace block.

#![allow(dead_code)]

use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Parsed {
    /// Tags in the order they appear on the wire.
    pub order: Vec<u8>,
    pub headers: BTreeMap<u8, Vec<u8>>,
    /// Raw length fields as written.
    pub length_fields: BTreeMap<u8, Vec<u8>>,
    pub traces: Vec<u8>,
}

pub fn parse(bytes: &[u8]) -> Parsed {
    let mut parsed = Parsed::default();
    let mut i = 0usize;

    loop {
        let tag = bytes[i];
        i += 1;

        let first = bytes[i];
        let field_start = i;
        i += 1;
        let len = if first & 0x80 != 0 {
            let k = (first & 0x7F) as usize;
            let mut len = 0usize;
            for j in 0..k {
                len |= (bytes[i + j] as usize) << (8 * j);
            }
            i += k;
            len
        } else {
            first as usize
        };

        if tag == 0x5F {
            assert_eq!(len, 0, "trace block marker must have length 0");
            break;
        }

        parsed.order.push(tag);
        parsed.length_fields.insert(tag, bytes[field_start..i].to_vec());
        parsed.headers.insert(tag, bytes[i..i + len].to_vec());
        i += len;
    }

    parsed.traces = bytes[i..].to_vec();
    parsed
}

/// Header prefix every two-trace, three-sample, 8-bit set starts with.
pub const BASE_HEADERS_U8: [u8; 9] = [0x41, 0x01, 0x02, 0x42, 0x01, 0x03, 0x43, 0x01, 0x01];

/// Two traces `{1,2,3}` and `{4,5,6}`.
pub fn two_traces<T: From<u8>>() -> Vec<Vec<T>> {
    vec![
        vec![T::from(1), T::from(2), T::from(3)],
        vec![T::from(4), T::from(5), T::from(6)],
    ]
}

/// `BASE_HEADERS_U8`, then `extra`, then the marker and the 8-bit trace bytes.
pub fn expected_u8_with(extra: &[u8]) -> Vec<u8> {
    let mut out = BASE_HEADERS_U8.to_vec();
    out.extend_from_slice(extra);
    out.extend_from_slice(&[0x5F, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    out
}

/// Unique path under the system temp dir.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("trs_core_{}_{}.trs", name, std::process::id()))
}
