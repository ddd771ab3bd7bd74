//! traces/pack.rs
//!
//! Flatten trace sets into the raw trace block.
//!
//! Design notes:
//! - Every sample becomes exactly `width` bytes: its natural bytes, left
//!   padded with zeros. A sample whose natural bytes are wider than `width`
//!   is an error, never silently truncated or widened.
//! - Traces are emitted in order, samples in order within a trace.
//! - Optional per-trace extra data goes immediately before that trace's
//!   samples.
//! - Strict layout requires equal trace lengths. Ragged layout pads short
//!   traces with trailing zero samples up to the longest trace.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::traces::types::{ExtraData, PackError, Sample, SampleWidth};
use crate::utils::fmt_bytes;

/// How traces of unequal length are handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceLayout {
    /// All traces must have the same number of samples.
    #[default]
    Strict,
    /// Short traces are padded with trailing zero samples.
    Ragged,
}

/// Append one sample, padded to `width`.
#[inline]
pub fn write_sample<T: Sample>(
    sample: T,
    width: SampleWidth,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    let natural = sample.natural_bytes();
    if natural.len() > width.bytes() {
        return Err(PackError::SampleOverflow {
            value: format!("{sample:?} ({})", fmt_bytes(&natural)),
            needed: natural.len(),
            width: width.get(),
        });
    }
    out.resize(out.len() + width.bytes() - natural.len(), 0);
    out.extend_from_slice(&natural);
    Ok(())
}

/// Append a run of samples.
pub fn pack_samples<T: Sample>(
    samples: &[T],
    width: SampleWidth,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    out.reserve(samples.len() * width.bytes());
    for &sample in samples {
        write_sample(sample, width, out)?;
    }
    Ok(())
}

/// Append one trace: extra data, samples, then zero samples up to `target_len`.
pub fn pack_trace<T: Sample>(
    trace: &[T],
    extra: Option<&ExtraData>,
    target_len: usize,
    width: SampleWidth,
    out: &mut Vec<u8>,
) -> Result<(), PackError> {
    if let Some(extra) = extra {
        out.extend_from_slice(extra.as_bytes());
    }
    pack_samples(trace, width, out)?;
    for _ in trace.len()..target_len {
        write_sample(T::default(), width, out)?;
    }
    Ok(())
}

/// Common length of all traces, or `StructuralMismatch` on the first that
/// differs. Returns 0 for an empty set.
pub fn validate_equal_length<S: AsRef<[T]>, T>(traces: &[S]) -> Result<usize, PackError> {
    let Some(first) = traces.first() else {
        return Ok(0);
    };
    let expected = first.as_ref().len();

    if let Some((index, trace)) = traces
        .iter()
        .enumerate()
        .find(|(_, t)| t.as_ref().len() != expected)
    {
        return Err(PackError::StructuralMismatch {
            detail: format!(
                "trace {index} has {} samples, expected {expected}; traces must all contain the same number of samples",
                trace.as_ref().len()
            ),
        });
    }
    Ok(expected)
}

/// Common extra data length, or `StructuralMismatch` if blobs differ.
pub fn validate_extra_data(extra: &[ExtraData]) -> Result<usize, PackError> {
    let Some(first) = extra.first() else {
        return Ok(0);
    };
    let expected = first.len();

    if let Some((index, blob)) = extra.iter().enumerate().find(|(_, e)| e.len() != expected) {
        return Err(PackError::StructuralMismatch {
            detail: format!(
                "extra data {index} is {} bytes, expected {expected}; every trace must carry the same amount of extra data",
                blob.len()
            ),
        });
    }
    Ok(expected)
}

/// Samples per trace for `traces` under `layout`.
pub fn samples_per_trace<T>(traces: &[Vec<T>], layout: TraceLayout) -> Result<usize, PackError> {
    match layout {
        TraceLayout::Strict => validate_equal_length(traces),
        TraceLayout::Ragged => Ok(traces.iter().map(Vec::len).max().unwrap_or(0)),
    }
}

/// Pack a whole trace set.
///
/// `extra`, when given, must hold one blob per trace; the caller checks the
/// count.
pub fn pack_trace_set<T: Sample>(
    traces: &[Vec<T>],
    extra: Option<&[ExtraData]>,
    width: SampleWidth,
    layout: TraceLayout,
) -> Result<Vec<u8>, PackError> {
    let target_len = samples_per_trace(traces, layout)?;
    let extra_len = match extra {
        Some(extra) => validate_extra_data(extra)?,
        None => 0,
    };

    let mut out = Vec::with_capacity(traces.len() * (extra_len + target_len * width.bytes()));
    for (index, trace) in traces.iter().enumerate() {
        if trace.len() < target_len {
            warn!(
                "trace {index} padded from {} to {target_len} samples",
                trace.len()
            );
        }
        let blob = extra.and_then(|e| e.get(index));
        pack_trace(trace, blob, target_len, width, &mut out)?;
    }
    Ok(out)
}

/// Anything that flattens into sample bytes: a single sample, or a
/// (possibly nested) sequence of them.
///
/// At every nesting level, sibling sub-sequences must have equal length.
pub trait Packable {
    type Sample: Sample;

    /// Length of this level when it is a sequence, `None` for a leaf sample.
    fn outer_len(&self) -> Option<usize>;

    fn pack_into(&self, width: SampleWidth, out: &mut Vec<u8>) -> Result<(), PackError>;
}

macro_rules! impl_packable_leaf {
    ($($t:ty),* $(,)?) => {$(
        impl Packable for $t {
            type Sample = $t;

            #[inline]
            fn outer_len(&self) -> Option<usize> {
                None
            }

            #[inline]
            fn pack_into(&self, width: SampleWidth, out: &mut Vec<u8>) -> Result<(), PackError> {
                write_sample(*self, width, out)
            }
        }
    )*};
}

impl_packable_leaf!(u8, u16, u32, i8, i16, i32, f32);

impl<P: Packable> Packable for [P] {
    type Sample = P::Sample;

    fn outer_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn pack_into(&self, width: SampleWidth, out: &mut Vec<u8>) -> Result<(), PackError> {
        // Leaves report `None`, so a flat trace always passes.
        let mut lens = self.iter().map(|item| item.outer_len()).enumerate();
        if let Some((_, expected)) = lens.next() {
            if let Some((index, Some(len))) = lens.find(|(_, len)| *len != expected) {
                return Err(PackError::StructuralMismatch {
                    detail: format!(
                        "sequence {index} has {len} entries, expected {}; sibling sequences must have equal length",
                        expected.unwrap_or(0)
                    ),
                });
            }
        }
        for item in self {
            item.pack_into(width, out)?;
        }
        Ok(())
    }
}

impl<P: Packable> Packable for Vec<P> {
    type Sample = P::Sample;

    #[inline]
    fn outer_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn pack_into(&self, width: SampleWidth, out: &mut Vec<u8>) -> Result<(), PackError> {
        self.as_slice().pack_into(width, out)
    }
}

/// Pack a sample, a trace, or a nested trace container.
pub fn pack<P: Packable + ?Sized>(data: &P, width: SampleWidth) -> Result<Vec<u8>, PackError> {
    let mut out = Vec::new();
    data.pack_into(width, &mut out)?;
    Ok(out)
}
