//! headers/types.rs
//! Tag registry enum, stored header records and header errors.
//!
//! Notes:
//! - A record on the wire is `tag ++ length-field ++ value`.
//! - The length field is precomputed when the header is set so rendering is a
//!   straight copy.
//! - Tag 0x5F (trace block marker) is never stored; it is synthesized at render.

use std::borrow::Borrow;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::tags;
use crate::utils::enum_name_or_hex;

/// Every documented tag, for naming and matching.
///
/// The store itself is keyed by raw `u8` so callers can still write tags
/// with no variant here (e.g. the undocumented 0x5D).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
pub enum Tag {
    NumberOfTraces               = tags::NUMBER_OF_TRACES,
    NumberOfSamplesPerTrace      = tags::NUMBER_OF_SAMPLES_PER_TRACE,
    SampleCoding                 = tags::SAMPLE_CODING,
    LengthOfCryptographicData    = tags::LENGTH_OF_CRYPTOGRAPHIC_DATA,
    TitleSpacePerTrace           = tags::TITLE_SPACE_PER_TRACE,
    TraceTitle                   = tags::TRACE_TITLE,
    Description                  = tags::DESCRIPTION,
    AxisOffsetX                  = tags::AXIS_OFFSET_X,
    AxisLabelX                   = tags::AXIS_LABEL_X,
    AxisLabelY                   = tags::AXIS_LABEL_Y,
    AxisScaleX                   = tags::AXIS_SCALE_X,
    AxisScaleY                   = tags::AXIS_SCALE_Y,
    TraceOffset                  = tags::TRACE_OFFSET,
    LogarithmicScale             = tags::LOGARITHMIC_SCALE,
    ScopeRange                   = tags::SCOPE_RANGE,
    ScopeCoupling                = tags::SCOPE_COUPLING,
    ScopeOffset                  = tags::SCOPE_OFFSET,
    ScopeInputImpedance          = tags::SCOPE_INPUT_IMPEDANCE,
    ScopeId                      = tags::SCOPE_ID,
    FilterType                   = tags::FILTER_TYPE,
    FilterFrequency              = tags::FILTER_FREQUENCY,
    FilterRange                  = tags::FILTER_RANGE,
    TraceBlockMarker             = tags::TRACE_BLOCK_MARKER,
    ExternalClockUsed            = tags::EXTERNAL_CLOCK_USED,
    ExternalClockThreshold       = tags::EXTERNAL_CLOCK_THRESHOLD,
    ExternalClockMultiplier      = tags::EXTERNAL_CLOCK_MULTIPLIER,
    ExternalClockPhaseShift      = tags::EXTERNAL_CLOCK_PHASE_SHIFT,
    ExternalClockResamplerMask   = tags::EXTERNAL_CLOCK_RESAMPLER_MASK,
    ExternalClockResamplerEnabled = tags::EXTERNAL_CLOCK_RESAMPLER_ENABLED,
    ExternalClockFrequency       = tags::EXTERNAL_CLOCK_FREQUENCY,
    ExternalClockTimeBase        = tags::EXTERNAL_CLOCK_TIME_BASE,
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> u8 {
        tag as u8
    }
}

/// Human readable tag: variant name when known, hex otherwise.
pub fn tag_name(raw: impl Borrow<u8>) -> String {
    enum_name_or_hex::<Tag>(*raw.borrow())
}

/// One stored header record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub tag: u8,
    /// Encoded length field (1 byte, or `0x80 | k` followed by k bytes).
    pub length: Vec<u8>,
    pub value: Vec<u8>,
}

impl HeaderEntry {
    /// Bytes this record occupies on the wire.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        1 + self.length.len() + self.value.len()
    }

    /// First value byte is non-zero.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.value.first().is_some_and(|&b| b != 0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Reserved tag or the trace block marker written directly.
    #[error("invalid tag 0x{tag:02x}: reserved tags (0x4f-0x54) and the trace block marker (0x5f) cannot be set")]
    InvalidTag { tag: u8 },

    /// A gated header was set before its gate.
    #[error("cannot set {}: enable it explicitly with {setter}()", tag_name(.tag))]
    PreconditionNotMet {
        tag: u8,
        requires: u8,
        setter: &'static str,
    },
}
