//! traces/types.rs
//! Sample types, sample width/coding and per-trace extra data.
//!
//! Notes:
//! - `Sample` is sealed: only 8/16/32-bit integers and `f32` qualify, so text
//!   or 64-bit samples are rejected at compile time.
//! - Integer samples are emitted big-endian, left-padded with zeros to the
//!   sample width. Float samples are emitted as their little-endian IEEE-754
//!   bytes.

use std::fmt;

use thiserror::Error;

use crate::constants::{ALLOWED_SAMPLE_WIDTHS, SAMPLE_CODING_FLOAT, SAMPLE_CODING_WIDTH_MASK};
use crate::utils::fmt_bytes;

mod sealed {
    pub trait Sealed {}
}

/// One numeric measurement.
pub trait Sample: Copy + Default + fmt::Debug + PartialEq + sealed::Sealed {
    /// Sets bit 5 of the sample coding.
    const IS_FLOAT: bool;
    /// `size_of::<Self>()`, the default sample width.
    const NATURAL_WIDTH: u8;

    /// Wire bytes before padding.
    ///
    /// Integers: big-endian with leading zero bytes stripped (at least one
    /// byte). Floats: full little-endian bytes.
    fn natural_bytes(self) -> Vec<u8>;
}

macro_rules! impl_integer_sample {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}
        impl Sample for $t {
            const IS_FLOAT: bool = false;
            const NATURAL_WIDTH: u8 = std::mem::size_of::<$t>() as u8;

            #[inline]
            fn natural_bytes(self) -> Vec<u8> {
                let be = self.to_be_bytes();
                let first = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
                be[first..].to_vec()
            }
        }
    )*};
}

impl_integer_sample!(u8, u16, u32, i8, i16, i32);

impl sealed::Sealed for f32 {}
impl Sample for f32 {
    const IS_FLOAT: bool = true;
    const NATURAL_WIDTH: u8 = 4;

    #[inline]
    fn natural_bytes(self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }
}

/// Byte width of one packed sample. Always 1, 2 or 4.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SampleWidth(u8);

impl SampleWidth {
    pub fn new(width: u8) -> Result<Self, PackError> {
        if ALLOWED_SAMPLE_WIDTHS.contains(&width) {
            Ok(Self(width))
        } else {
            Err(PackError::InvalidSampleWidth { width })
        }
    }

    /// Natural width of `T`.
    #[inline]
    pub fn of<T: Sample>() -> Self {
        Self(T::NATURAL_WIDTH)
    }

    /// Explicit width if given, natural width of `T` otherwise.
    pub fn resolve<T: Sample>(width: Option<u8>) -> Result<Self, PackError> {
        match width {
            Some(w) => Self::new(w),
            None => Ok(Self::of::<T>()),
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn bytes(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SampleWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} byte(s)", self.0)
    }
}

/// The 0x43 sample coding byte.
///
/// Bits 1-4: width in bytes. Bit 5: float. Bits 6-8: reserved, zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SampleCoding(u8);

impl SampleCoding {
    pub fn new(width: SampleWidth, is_float: bool) -> Self {
        let mut raw = width.get() & SAMPLE_CODING_WIDTH_MASK;
        if is_float {
            raw |= SAMPLE_CODING_FLOAT;
        }
        Self(raw)
    }

    #[inline]
    pub fn of<T: Sample>(width: SampleWidth) -> Self {
        Self::new(width, T::IS_FLOAT)
    }

    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn width(self) -> u8 {
        self.0 & SAMPLE_CODING_WIDTH_MASK
    }

    #[inline]
    pub fn is_float(self) -> bool {
        self.0 & SAMPLE_CODING_FLOAT != 0
    }
}

/// Auxiliary bytes emitted in front of one trace's samples (e.g. the
/// plaintext/ciphertext a trace was captured for).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtraData(Vec<u8>);

impl ExtraData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode hex text: `"6789"` -> `67 89`.
    pub fn from_hex(text: &str) -> Result<Self, PackError> {
        hex::decode(text)
            .map(Self)
            .map_err(|e| PackError::InvalidExtraData {
                detail: format!("{text:?}: {e}"),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ExtraData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Raw text bytes, no hex decoding.
impl From<&str> for ExtraData {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for ExtraData {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ExtraData {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for ExtraData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_bytes(&self.0))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("sample width must be 1, 2 or 4 bytes, got {width}")]
    InvalidSampleWidth { width: u8 },

    #[error("structural mismatch: {detail}")]
    StructuralMismatch { detail: String },

    /// Sample value needs more bytes than the declared width.
    #[error("sample {value} needs {needed} bytes but the sample width is {width}")]
    SampleOverflow { value: String, needed: usize, width: u8 },

    #[error("invalid extra data {detail}")]
    InvalidExtraData { detail: String },
}
