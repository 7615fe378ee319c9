//! Loads the manifest file from disk

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::parser::{ManifestDiagnostic, ManifestParser};
use crate::types::SubmoduleRecord;

/// Default manifest location relative to the superproject root
pub const DEFAULT_MANIFEST_PATH: &str = ".gitmodules";

/// A loaded manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Whether the file existed
    pub found: bool,
    /// Complete records in declaration order
    pub records: Vec<SubmoduleRecord>,
    /// Dropped blocks
    pub diagnostics: Vec<ManifestDiagnostic>,
}

/// Manifest file reader
pub struct ManifestReader;

impl ManifestReader {
    /// Read and parse the manifest at `path`.
    ///
    /// A missing file is not an error: it yields an empty manifest and a
    /// warning. Any other read failure is returned.
    pub fn read(path: &Path) -> Result<Manifest> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "{} not found", Self::file_label(path));
                return Ok(Manifest::default());
            }
            Err(e) => {
                return Err(Error::Manifest(format!(
                    "failed to read '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        let parsed = ManifestParser::parse(&content);
        for diag in &parsed.diagnostics {
            tracing::warn!(path = %path.display(), "{}", diag);
        }
        tracing::debug!(
            path = %path.display(),
            submodules = parsed.records.len(),
            "manifest parsed"
        );

        Ok(Manifest {
            found: true,
            records: parsed.records,
            diagnostics: parsed.diagnostics,
        })
    }

    fn file_label(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
