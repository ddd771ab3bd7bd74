//! constants.rs
//! Tag registry and wire constants for the TRS container.
//!
//! All headers are TLV records keyed by a one-byte tag. The tag space is
//! partitioned into fixed ranges; see `tags` for the named values.

use std::ops::RangeInclusive;

/// Named header tags.
pub mod tags {
    pub const NUMBER_OF_TRACES: u8                 = 0x41;
    pub const NUMBER_OF_SAMPLES_PER_TRACE: u8      = 0x42;
    pub const SAMPLE_CODING: u8                    = 0x43;
    pub const LENGTH_OF_CRYPTOGRAPHIC_DATA: u8     = 0x44;
    pub const TITLE_SPACE_PER_TRACE: u8            = 0x45;
    pub const TRACE_TITLE: u8                      = 0x46;
    pub const DESCRIPTION: u8                      = 0x47;
    pub const AXIS_OFFSET_X: u8                    = 0x48;
    pub const AXIS_LABEL_X: u8                     = 0x49;
    pub const AXIS_LABEL_Y: u8                     = 0x4A;
    pub const AXIS_SCALE_X: u8                     = 0x4B;
    pub const AXIS_SCALE_Y: u8                     = 0x4C;
    pub const TRACE_OFFSET: u8                     = 0x4D;
    pub const LOGARITHMIC_SCALE: u8                = 0x4E;
    // 0x4F - 0x54 reserved
    pub const SCOPE_RANGE: u8                      = 0x55;
    pub const SCOPE_COUPLING: u8                   = 0x56;
    pub const SCOPE_OFFSET: u8                     = 0x57;
    pub const SCOPE_INPUT_IMPEDANCE: u8            = 0x58;
    pub const SCOPE_ID: u8                         = 0x59;
    pub const FILTER_TYPE: u8                      = 0x5A;
    pub const FILTER_FREQUENCY: u8                 = 0x5B;
    pub const FILTER_RANGE: u8                     = 0x5C;
    // 0x5D - 0x5E undocumented
    pub const TRACE_BLOCK_MARKER: u8               = 0x5F;
    pub const EXTERNAL_CLOCK_USED: u8              = 0x60;
    pub const EXTERNAL_CLOCK_THRESHOLD: u8         = 0x61;
    pub const EXTERNAL_CLOCK_MULTIPLIER: u8        = 0x62;
    pub const EXTERNAL_CLOCK_PHASE_SHIFT: u8       = 0x63;
    pub const EXTERNAL_CLOCK_RESAMPLER_MASK: u8    = 0x64;
    pub const EXTERNAL_CLOCK_RESAMPLER_ENABLED: u8 = 0x65;
    pub const EXTERNAL_CLOCK_FREQUENCY: u8         = 0x66;
    pub const EXTERNAL_CLOCK_TIME_BASE: u8         = 0x67;
}

/// Tags that must never be written.
pub const RESERVED_TAGS: RangeInclusive<u8> = 0x4F..=0x54;

/// Tags that require `EXTERNAL_CLOCK_USED` to be truthy first.
/// `EXTERNAL_CLOCK_USED` itself is the gate and sits outside this range.
pub const EXTERNAL_CLOCK_TAGS: RangeInclusive<u8> =
    tags::EXTERNAL_CLOCK_THRESHOLD..=tags::EXTERNAL_CLOCK_TIME_BASE;

/// Largest length that fits the one-byte length form.
pub const SHORT_LENGTH_MAX: usize = 0x7F;

/// High bit of the first length byte: "k length bytes follow".
pub const EXTENDED_LENGTH_FLAG: u8 = 0x80;

/// Sample coding, bit 5: samples are IEEE floats.
pub const SAMPLE_CODING_FLOAT: u8 = 0x10;

/// Sample coding, bits 1-4: sample width in bytes.
pub const SAMPLE_CODING_WIDTH_MASK: u8 = 0x0F;

/// Sample widths the format accepts.
pub const ALLOWED_SAMPLE_WIDTHS: &[u8] = &[1, 2, 4];

/// Default values for the named setters when the caller has none.
pub mod defaults {
    pub const CRYPTOGRAPHIC_DATA_LENGTH: u16 = 0;
    pub const TITLE_SPACE_PER_TRACE: u8 = 0;
    pub const TRACE_TITLE: &str = "trace";
    pub const AXIS_OFFSET_X: u32 = 0;
    pub const AXIS_SCALE_X: f32 = 1.0;
    pub const AXIS_SCALE_Y: f32 = 1.0;
    pub const TRACE_OFFSET: u32 = 0;
    pub const LOGARITHMIC_SCALE: u8 = 0;
    pub const SCOPE_RANGE: f32 = 0.0;
    pub const SCOPE_COUPLING: u32 = 0;
    pub const SCOPE_OFFSET: f32 = 0.0;
    pub const SCOPE_INPUT_IMPEDANCE: f32 = 0.0;
    pub const FILTER_TYPE: u32 = 0;
    pub const FILTER_FREQUENCY: f32 = 0.0;
    pub const FILTER_RANGE: f32 = 0.0;
    pub const EXTERNAL_CLOCK_USED: bool = true;
    pub const EXTERNAL_CLOCK_THRESHOLD: f32 = 0.0;
    pub const EXTERNAL_CLOCK_MULTIPLIER: u32 = 0;
    pub const EXTERNAL_CLOCK_PHASE_SHIFT: u32 = 0;
    pub const EXTERNAL_CLOCK_RESAMPLER_MASK: u32 = 0;
    pub const EXTERNAL_CLOCK_RESAMPLER_ENABLED: bool = true;
    pub const EXTERNAL_CLOCK_FREQUENCY: f32 = 0.0;
    pub const EXTERNAL_CLOCK_TIME_BASE: u32 = 0;
}
