//! serialiser/core.rs
//!
//! The `Serialiser` façade: owns one header store and one packed trace block.
//!
//! Design notes:
//! - Every constructor derives the three mandatory headers (trace count,
//!   samples per trace, sample coding) and sets them in that order.
//! - Traces are kept alongside the packed bytes so `add_trace` can re-pad in
//!   ragged mode; in strict mode an added trace is packed and appended.
//! - Every mutating call validates and packs into scratch space first, then
//!   commits. A rejected call leaves the serialiser unchanged.
//! - One instance must not be mutated from several threads at once; callers
//!   serialise access. Distinct instances share nothing.

use log::debug;

use crate::codec::HeaderValue;
use crate::config::SerialiserOptions;
use crate::constants::tags;
use crate::headers::{HeaderEntry, HeaderStore};
use crate::traces::{
    pack_samples, pack_trace, pack_trace_set, samples_per_trace, validate_extra_data,
    ExtraData, PackError, Sample, SampleCoding, SampleWidth, TraceLayout,
};
use crate::types::{Result, SerialiserError};

/// Builds one trace-set container.
///
/// `T` is the in-memory sample type; the on-disk width can be narrower
/// (or wider) via the sample width argument of the constructors.
#[derive(Debug, Clone)]
pub struct Serialiser<T: Sample = f32> {
    headers: HeaderStore,
    traces: Vec<Vec<T>>,
    extra: Option<Vec<ExtraData>>,
    width: SampleWidth,
    layout: TraceLayout,
    samples_per_trace: usize,
    packed: Vec<u8>,
}

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        SerialiserError::DimensionMismatch(format!("{what} {value} does not fit in 32 bits"))
    })
}

impl<T: Sample> Serialiser<T> {
    // -------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------

    /// Flat samples with explicit dimensions.
    ///
    /// `trace_count * samples_per_trace * sample_width` must equal the packed
    /// size of `samples`, else `DimensionMismatch`.
    pub fn from_samples(
        samples: &[T],
        trace_count: u32,
        samples_per_trace: u32,
        sample_width: Option<u8>,
    ) -> Result<Self> {
        let width = SampleWidth::resolve::<T>(sample_width)?;

        let mut packed = Vec::new();
        pack_samples(samples, width, &mut packed)?;

        let expected = trace_count as u64 * samples_per_trace as u64 * width.bytes() as u64;
        if expected != packed.len() as u64 {
            return Err(SerialiserError::DimensionMismatch(format!(
                "{trace_count} traces x {samples_per_trace} samples x {width} = {expected} bytes, \
                 but {} samples pack to {} bytes",
                samples.len(),
                packed.len()
            )));
        }

        let spt = samples_per_trace as usize;
        let traces = if spt == 0 {
            if trace_count > 1 {
                return Err(SerialiserError::DimensionMismatch(format!(
                    "{trace_count} traces of 0 samples; an empty set holds at most one trace"
                )));
            }
            vec![Vec::new(); trace_count as usize]
        } else {
            samples.chunks(spt).map(<[T]>::to_vec).collect()
        };

        let mut serialiser = Self {
            headers: HeaderStore::new(),
            traces,
            extra: None,
            width,
            layout: TraceLayout::Strict,
            samples_per_trace: spt,
            packed,
        };
        serialiser.add_required_headers()?;
        debug!(
            "serialiser from flat samples: {trace_count} traces x {spt} samples, width {width}"
        );
        Ok(serialiser)
    }

    /// Flat samples split evenly into `trace_count` traces, natural width.
    ///
    /// The sample count must be an exact multiple of `trace_count`.
    pub fn from_flat(samples: &[T], trace_count: u32) -> Result<Self> {
        if trace_count == 0 {
            return Err(SerialiserError::DimensionMismatch(
                "trace count must be non-zero to derive samples per trace".into(),
            ));
        }
        if samples.len() % trace_count as usize != 0 {
            return Err(SerialiserError::DimensionMismatch(format!(
                "{} samples do not divide evenly into {trace_count} traces",
                samples.len()
            )));
        }
        let samples_per_trace = to_u32(samples.len() / trace_count as usize, "samples per trace")?;
        Self::from_samples(samples, trace_count, samples_per_trace, None)
    }

    /// One `Vec` per trace, natural width. Traces must be equal length.
    pub fn new(traces: Vec<Vec<T>>) -> Result<Self> {
        Self::build(traces, None, SampleWidth::of::<T>(), TraceLayout::Strict)
    }

    /// One `Vec` per trace with an explicit sample width.
    pub fn with_sample_width(traces: Vec<Vec<T>>, sample_width: u8) -> Result<Self> {
        Self::build(traces, None, SampleWidth::new(sample_width)?, TraceLayout::Strict)
    }

    /// Traces with one extra data blob each, emitted in front of each trace.
    ///
    /// All blobs must be the same length; that length is recorded in the
    /// 0x44 header.
    pub fn with_extra_data<E: Into<ExtraData>>(
        extra: Vec<E>,
        traces: Vec<Vec<T>>,
        sample_width: Option<u8>,
    ) -> Result<Self> {
        let extra = extra.into_iter().map(Into::into).collect();
        Self::build(
            traces,
            Some(extra),
            SampleWidth::resolve::<T>(sample_width)?,
            TraceLayout::Strict,
        )
    }

    /// Traces of any length; short ones are padded with trailing zero samples.
    pub fn from_ragged_traces(traces: Vec<Vec<T>>, sample_width: Option<u8>) -> Result<Self> {
        Self::build(
            traces,
            None,
            SampleWidth::resolve::<T>(sample_width)?,
            TraceLayout::Ragged,
        )
    }

    /// Nested traces with width and layout taken from `options`.
    pub fn with_options(traces: Vec<Vec<T>>, options: SerialiserOptions) -> Result<Self> {
        Self::build(traces, None, options.resolve_width::<T>()?, options.layout)
    }

    fn build(
        traces: Vec<Vec<T>>,
        extra: Option<Vec<ExtraData>>,
        width: SampleWidth,
        layout: TraceLayout,
    ) -> Result<Self> {
        if let Some(extra) = &extra {
            if extra.len() != traces.len() {
                return Err(SerialiserError::DimensionMismatch(format!(
                    "{} extra data entries for {} traces",
                    extra.len(),
                    traces.len()
                )));
            }
        }

        let samples_per_trace = samples_per_trace(&traces, layout)?;
        let packed = pack_trace_set(&traces, extra.as_deref(), width, layout)?;

        let mut serialiser = Self {
            headers: HeaderStore::new(),
            traces,
            extra,
            width,
            layout,
            samples_per_trace,
            packed,
        };
        debug_assert_eq!(
            serialiser.packed.len(),
            serialiser.traces.len()
                * (serialiser.extra_data_len().unwrap_or(0)
                    + serialiser.samples_per_trace * width.bytes())
        );
        serialiser.add_required_headers()?;
        if let Some(len) = serialiser.extra_data_len() {
            serialiser
                .headers
                .set(tags::LENGTH_OF_CRYPTOGRAPHIC_DATA, &to_u32(len, "extra data length")?)?;
        }
        debug!(
            "serialiser built: {} traces x {} samples, width {}, {:?} layout",
            serialiser.traces.len(),
            serialiser.samples_per_trace,
            width,
            layout
        );
        Ok(serialiser)
    }

    // -------------------------------------------------------------------------
    // Headers
    // -------------------------------------------------------------------------

    /// Set any header. Public so callers can write tags without a named setter.
    pub fn add_header<V: HeaderValue + ?Sized>(&mut self, tag: impl Into<u8>, value: &V) -> Result<()> {
        self.headers.set(tag.into(), value)?;
        Ok(())
    }

    /// Trace count, samples per trace, sample coding; in that order.
    fn add_required_headers(&mut self) -> Result<()> {
        let trace_count = to_u32(self.traces.len(), "trace count")?;
        let samples_per_trace = to_u32(self.samples_per_trace, "samples per trace")?;
        let sample_coding = self.sample_coding().raw();

        self.headers.set(tags::NUMBER_OF_TRACES, &trace_count)?;
        self.headers.set(tags::NUMBER_OF_SAMPLES_PER_TRACE, &samples_per_trace)?;
        self.headers.set(tags::SAMPLE_CODING, &sample_coding)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Traces
    // -------------------------------------------------------------------------

    /// Append one trace.
    ///
    /// Strict layout: the trace must match the current samples per trace.
    /// Ragged layout: any length; the set is re-padded if it is the longest.
    /// A strict blank set (see `is_blank`) is replaced by the new trace.
    pub fn add_trace(&mut self, samples: Vec<T>) -> Result<()> {
        if self.extra.is_some() {
            return Err(PackError::StructuralMismatch {
                detail: "traces carry extra data; use add_trace_with_data".into(),
            }
            .into());
        }
        self.append(samples, None)
    }

    /// Append one trace with its extra data blob.
    pub fn add_trace_with_data(&mut self, extra: impl Into<ExtraData>, samples: Vec<T>) -> Result<()> {
        if self.extra.is_none() {
            return Err(PackError::StructuralMismatch {
                detail: "traces carry no extra data; use add_trace".into(),
            }
            .into());
        }
        self.append(samples, Some(extra.into()))
    }

    fn append(&mut self, samples: Vec<T>, extra: Option<ExtraData>) -> Result<()> {
        if self.layout == TraceLayout::Strict && self.is_blank() {
            return self.replace_blank(samples, extra);
        }

        if let (Some(blob), Some(expected)) = (&extra, self.extra_data_len()) {
            if blob.len() != expected {
                return Err(PackError::StructuralMismatch {
                    detail: format!(
                        "extra data is {} bytes, expected {expected}",
                        blob.len()
                    ),
                }
                .into());
            }
        }

        let trace_count = to_u32(self.traces.len() + 1, "trace count")?;
        let grows = samples.len() > self.samples_per_trace;

        match self.layout {
            TraceLayout::Strict if samples.len() != self.samples_per_trace => {
                return Err(PackError::StructuralMismatch {
                    detail: format!(
                        "new trace has {} samples, expected {}; traces must all contain the same number of samples",
                        samples.len(),
                        self.samples_per_trace
                    ),
                }
                .into());
            }
            TraceLayout::Ragged if grows => {
                let samples_per_trace = to_u32(samples.len(), "samples per trace")?;
                let mut traces = self.traces.clone();
                traces.push(samples);
                let extra = self.extra.clone().map(|mut all| {
                    all.extend(extra);
                    all
                });
                let packed = pack_trace_set(&traces, extra.as_deref(), self.width, self.layout)?;

                self.headers.set(tags::NUMBER_OF_TRACES, &trace_count)?;
                self.headers.set(tags::NUMBER_OF_SAMPLES_PER_TRACE, &samples_per_trace)?;
                self.samples_per_trace = samples_per_trace as usize;
                self.traces = traces;
                self.extra = extra;
                self.packed = packed;
            }
            _ => {
                let mut bytes = Vec::new();
                pack_trace(&samples, extra.as_ref(), self.samples_per_trace, self.width, &mut bytes)?;

                self.headers.set(tags::NUMBER_OF_TRACES, &trace_count)?;
                self.packed.extend_from_slice(&bytes);
                self.traces.push(samples);
                if let (Some(all), Some(blob)) = (self.extra.as_mut(), extra) {
                    all.push(blob);
                }
            }
        }

        debug!(
            "trace appended: {} traces x {} samples, trace block {} bytes",
            self.traces.len(),
            self.samples_per_trace,
            self.packed.len()
        );
        Ok(())
    }

    /// Swap a blank strict set for a single new trace.
    fn replace_blank(&mut self, samples: Vec<T>, extra: Option<ExtraData>) -> Result<()> {
        let traces = vec![samples];
        let extra = extra.map(|blob| vec![blob]);
        let samples_per_trace = traces[0].len();
        let packed = pack_trace_set(&traces, extra.as_deref(), self.width, self.layout)?;
        let extra_len = extra.as_deref().map(validate_extra_data).transpose()?;

        let mut headers = self.headers.clone();
        headers.set(tags::NUMBER_OF_TRACES, &1u32)?;
        headers.set(
            tags::NUMBER_OF_SAMPLES_PER_TRACE,
            &to_u32(samples_per_trace, "samples per trace")?,
        )?;
        if let Some(len) = extra_len {
            headers.set(tags::LENGTH_OF_CRYPTOGRAPHIC_DATA, &to_u32(len, "extra data length")?)?;
        }

        self.headers = headers;
        self.traces = traces;
        self.extra = extra;
        self.samples_per_trace = samples_per_trace;
        self.packed = packed;
        debug!("blank trace set replaced by a trace of {samples_per_trace} samples");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Headers in ascending tag order, the `5f 00` marker, then the trace block.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rendered_len());
        self.headers.render_into(&mut out);
        out.extend_from_slice(&self.packed);
        debug!(
            "rendered {} header bytes + {} trace bytes",
            out.len() - self.packed.len(),
            self.packed.len()
        );
        out
    }

    #[inline]
    pub fn rendered_len(&self) -> usize {
        self.headers.encoded_len() + self.packed.len()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// No samples and at most one trace, e.g. built from `[[]]`.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.samples_per_trace == 0 && self.traces.len() <= 1
    }

    #[inline]
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    #[inline]
    pub fn samples_per_trace(&self) -> usize {
        self.samples_per_trace
    }

    #[inline]
    pub fn sample_width(&self) -> SampleWidth {
        self.width
    }

    #[inline]
    pub fn sample_coding(&self) -> SampleCoding {
        SampleCoding::of::<T>(self.width)
    }

    #[inline]
    pub fn layout(&self) -> TraceLayout {
        self.layout
    }

    #[inline]
    pub fn traces(&self) -> &[Vec<T>] {
        &self.traces
    }

    #[inline]
    pub fn extra_data(&self) -> Option<&[ExtraData]> {
        self.extra.as_deref()
    }

    /// Common extra data length, if traces carry extra data.
    pub fn extra_data_len(&self) -> Option<usize> {
        self.extra
            .as_ref()
            .map(|all| all.first().map_or(0, ExtraData::len))
    }

    #[inline]
    pub fn trace_bytes(&self) -> &[u8] {
        &self.packed
    }

    #[inline]
    pub fn header(&self, tag: impl Into<u8>) -> Option<&HeaderEntry> {
        self.headers.get(tag.into())
    }

    #[inline]
    pub fn headers(&self) -> &HeaderStore {
        &self.headers
    }
}
