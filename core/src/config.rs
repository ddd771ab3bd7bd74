//! config.rs
//! Construction options for a `Serialiser`.
//!
//! Options can be built in code or loaded from JSON:
//!
//! ```json
//! { "sample_width": 2, "layout": "ragged" }
//! ```
//!
//! Missing fields fall back to `Default`: natural sample width, strict layout.

use serde::{Deserialize, Serialize};

use crate::traces::{PackError, Sample, SampleWidth, TraceLayout};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialiserOptions {
    /// Bytes per sample; `None` means the natural width of the sample type.
    pub sample_width: Option<u8>,
    pub layout: TraceLayout,
}

impl SerialiserOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_sample_width(mut self, width: u8) -> Self {
        self.sample_width = Some(width);
        self
    }

    pub fn with_layout(mut self, layout: TraceLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Validated width for sample type `T`.
    pub fn resolve_width<T: Sample>(&self) -> Result<SampleWidth, PackError> {
        SampleWidth::resolve::<T>(self.sample_width)
    }
}
