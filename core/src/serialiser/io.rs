//! serialiser/io.rs
//!
//! Output sinks.
//!
//! Notes:
//! - The container is rendered fully in memory, then written with one
//!   `write_all`; no streaming.
//! - `save` creates or truncates the file but never creates directories.
//! - A file that could not be fully written is removed before the error is
//!   returned, so no truncated container is left behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{debug, log_enabled, trace, warn, Level};

use crate::serialiser::core::Serialiser;
use crate::traces::Sample;
use crate::types::Result;
use crate::utils::hex_dump;

impl<T: Sample> Serialiser<T> {
    /// Render into any writer and flush it.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        let bytes = self.render();
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }

    /// Render and write to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render();

        let mut file = File::create(path)?;
        let written = file.write_all(&bytes).and_then(|()| file.sync_all());
        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = fs::remove_file(path) {
                warn!("could not remove partial file {}: {cleanup}", path.display());
            }
            return Err(e.into());
        }

        debug!("saved {} bytes to {}", bytes.len(), path.display());
        if log_enabled!(Level::Trace) {
            trace!("header block:\n{}", hex_dump(&self.headers().render()));
        }
        Ok(())
    }
}
