//! trs-core
//!
//! Write-only encoder for TRS trace-set containers: TLV headers followed by
//! a raw block of packed side-channel trace samples.
//!
//! ```no_run
//! use trs_core::prelude::*;
//!
//! let mut serialiser = Serialiser::<u8>::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
//! serialiser.set_trace_title("aes round 1")?;
//! serialiser.save("traces.trs")?;
//! # Ok::<(), SerialiserError>(())
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Encoding layers
pub mod codec;
pub mod headers;
pub mod traces;

// Façade
pub mod serialiser;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::SerialiserOptions;
    pub use crate::constants::tags;
    pub use crate::headers::{HeaderError, Tag};
    pub use crate::serialiser::Serialiser;
    pub use crate::traces::{ExtraData, PackError, SampleWidth, TraceLayout};
    pub use crate::types::{ErrorKind, SerialiserError};
}
