use std::io;

use thiserror::Error;

use crate::headers::HeaderError;
use crate::traces::PackError;

/// Error taxonomy. Match on this instead of message text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSampleWidth,
    DimensionMismatch,
    StructuralMismatch,
    PreconditionNotMet,
    InvalidTag,
    SinkUnavailable,
    SampleOverflow,
    InvalidExtraData,
}

/// Unified serialiser error covering headers, packing, dimensions and I/O.
/// - `From<T>` impls enable `?` across layers.
#[derive(Debug, Error)]
pub enum SerialiserError {
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    #[error("trace error: {0}")]
    Pack(#[from] PackError),

    /// Declared trace/sample counts do not match the data supplied.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Output could not be opened or fully written.
    #[error("sink unavailable: {0}")]
    SinkUnavailable(#[from] io::Error),
}

impl SerialiserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerialiserError::Header(HeaderError::InvalidTag { .. }) => ErrorKind::InvalidTag,
            SerialiserError::Header(HeaderError::PreconditionNotMet { .. }) => {
                ErrorKind::PreconditionNotMet
            }
            SerialiserError::Pack(PackError::InvalidSampleWidth { .. }) => {
                ErrorKind::InvalidSampleWidth
            }
            SerialiserError::Pack(PackError::StructuralMismatch { .. }) => {
                ErrorKind::StructuralMismatch
            }
            SerialiserError::Pack(PackError::SampleOverflow { .. }) => ErrorKind::SampleOverflow,
            SerialiserError::Pack(PackError::InvalidExtraData { .. }) => {
                ErrorKind::InvalidExtraData
            }
            SerialiserError::DimensionMismatch(_) => ErrorKind::DimensionMismatch,
            SerialiserError::SinkUnavailable(_) => ErrorKind::SinkUnavailable,
        }
    }
}

pub type Result<T, E = SerialiserError> = std::result::Result<T, E>;
