//! headers/store.rs
//!
//! Ordered header store with tag gating.
//!
//! Design notes:
//! - Backed by a `BTreeMap` so iteration (and therefore rendering) is always
//!   ascending tag order, independent of call order.
//! - Setting a tag twice replaces the previous record.
//! - Validation runs before any mutation: a rejected `set` leaves the store
//!   exactly as it was.
//! - External clock tags 0x61..=0x67 need 0x60 truthy; 0x64 additionally
//!   needs 0x65 truthy. These are ordering preconditions only.

use std::collections::BTreeMap;

use log::trace;

use crate::codec::HeaderValue;
use crate::constants::{tags, EXTERNAL_CLOCK_TAGS, RESERVED_TAGS};
use crate::headers::encode::{encode_length, encode_record, encode_trace_block_marker};
use crate::headers::types::{tag_name, HeaderEntry, HeaderError};
use crate::utils::hex_preview;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStore {
    entries: BTreeMap<u8, HeaderEntry>,
}

impl HeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, encode and insert (or replace) a header.
    pub fn set<V: HeaderValue + ?Sized>(&mut self, tag: u8, value: &V) -> Result<(), HeaderError> {
        self.validate(tag)?;

        let value = value.to_header_bytes();
        let length = encode_length(value.len());
        trace!(
            "header {} len={} value={}",
            tag_name(tag),
            value.len(),
            hex_preview(&value)
        );

        self.entries.insert(tag, HeaderEntry { tag, length, value });
        Ok(())
    }

    /// Check that `tag` may be set given what is already stored.
    fn validate(&self, tag: u8) -> Result<(), HeaderError> {
        if RESERVED_TAGS.contains(&tag) || tag == tags::TRACE_BLOCK_MARKER {
            return Err(HeaderError::InvalidTag { tag });
        }

        if !EXTERNAL_CLOCK_TAGS.contains(&tag) {
            return Ok(());
        }

        if !self.get_bool(tags::EXTERNAL_CLOCK_USED) {
            return Err(HeaderError::PreconditionNotMet {
                tag,
                requires: tags::EXTERNAL_CLOCK_USED,
                setter: "set_external_clock_used",
            });
        }

        if tag == tags::EXTERNAL_CLOCK_RESAMPLER_MASK
            && !self.get_bool(tags::EXTERNAL_CLOCK_RESAMPLER_ENABLED)
        {
            return Err(HeaderError::PreconditionNotMet {
                tag,
                requires: tags::EXTERNAL_CLOCK_RESAMPLER_ENABLED,
                setter: "set_external_clock_resampler_enabled",
            });
        }

        Ok(())
    }

    /// True iff `tag` is present and its first value byte is non-zero.
    #[inline]
    pub fn get_bool(&self, tag: u8) -> bool {
        self.entries.get(&tag).is_some_and(HeaderEntry::is_truthy)
    }

    #[inline]
    pub fn get(&self, tag: u8) -> Option<&HeaderEntry> {
        self.entries.get(&tag)
    }

    #[inline]
    pub fn contains(&self, tag: u8) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Stored records in render order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered size, marker record included.
    pub fn encoded_len(&self) -> usize {
        self.entries.values().map(HeaderEntry::encoded_len).sum::<usize>() + 2
    }

    /// All records in ascending tag order, then `5f 00`.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.render_into(&mut out);
        out
    }

    pub fn render_into(&self, out: &mut Vec<u8>) {
        for entry in self.entries.values() {
            encode_record(entry, out);
        }
        encode_trace_block_marker(out);
    }
}
