//! Writes the rendered dashboard to disk

use std::path::Path;

use crate::error::{Error, Result};

/// Output file writer
pub struct OutputWriter;

impl OutputWriter {
    /// Replace the contents of `path` with `content`.
    ///
    /// The parent directory must already exist; it is never created.
    pub fn write(path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("cannot write '{}': {}", path.display(), e),
            ))
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "dashboard written");
        Ok(())
    }
}
