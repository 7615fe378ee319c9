//! # subdash core
//!
//! Builds a status dashboard for the git submodules declared in a
//! `.gitmodules` manifest.
//!
//! The pipeline is strictly sequential:
//! - **manifest** parses `[submodule "..."]` blocks into records
//! - **patterns** optionally narrows the records with globs
//! - **git** answers hash/date/count/tag queries per submodule, either by
//!   spawning `git` or through libgit2
//! - **output** renders Markdown (or JSON) and writes the file
//!
//! ## Example
//!
//! ```no_run
//! use subdash_core::{generate_dashboard, RunSettings};
//!
//! # fn example() -> subdash_core::Result<()> {
//! let settings = RunSettings::default();
//! let written = generate_dashboard(&settings)?;
//! println!("Dashboard generated at {}", written.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod coordination;
pub mod error;
pub mod git;
pub mod manifest;
pub mod output;
pub mod patterns;
pub mod traits;
pub mod types;

use std::path::PathBuf;

pub use config::{DashboardConfig, RunSettings};
pub use error::{Error, ErrorKind, Result};
pub use traits::StatusProbe;
pub use types::{
    GitStatus, OutputFormat, ProbeBackend, Report, StatusRow, StructureEntry, SubmoduleRecord,
    SubmoduleState,
};

use coordination::DashboardProcessor;
use git::{GitCli, LibGit2Probe};
use output::OutputWriter;

/// Collect the status of every selected submodule with the configured backend
pub fn build_report(settings: &RunSettings) -> Result<Report> {
    match settings.backend {
        ProbeBackend::Cli => {
            let probe = GitCli::with_program(&settings.git_program);
            DashboardProcessor::new(settings, probe).process()
        }
        ProbeBackend::LibGit2 => DashboardProcessor::new(settings, LibGit2Probe::new()).process(),
    }
}

/// Collect and render, without touching the output file
pub fn render_dashboard(settings: &RunSettings) -> Result<String> {
    let report = build_report(settings)?;
    output::render(&report, settings.format)
}

/// Collect, render and overwrite the output file.
///
/// Returns the path that was written. Fails if the output directory does not
/// exist.
pub fn generate_dashboard(settings: &RunSettings) -> Result<PathBuf> {
    let document = render_dashboard(settings)?;
    let path = settings.output_path();
    OutputWriter::write(&path, &document)?;
    tracing::info!(path = %path.display(), "dashboard written");
    Ok(path)
}
