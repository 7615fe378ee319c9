//! Core type definitions

use serde::Serialize;
use std::str::FromStr;

use crate::error::Error;

/// Rendered in every status column when a git query fails
pub const ERROR_SENTINEL: &str = "Error";

/// Rendered in the tag column when no tag is reachable, and in the
/// commit/date/count columns of a missing submodule
pub const NONE_SENTINEL: &str = "-";

/// Rendered in the tag column when the submodule directory is absent
pub const MISSING_MARKER: &str = "MISSING";

/// One `[submodule "..."]` block of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmoduleRecord {
    /// Name from the section header
    pub name: String,
    /// Path relative to the superproject root (never empty)
    pub path: String,
    /// Remote URL
    pub url: String,
}

/// Local git metadata of a checked-out submodule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitStatus {
    /// Abbreviated `HEAD` hash
    pub commit_hash: String,
    /// `HEAD` commit date as `YYYY-MM-DD`
    pub commit_date: String,
    /// Number of commits reachable from `HEAD`
    pub commit_count: String,
    /// Most recent reachable tag, or [`NONE_SENTINEL`]
    pub tag: String,
}

impl GitStatus {
    /// Status used when any of the hash/date/count queries failed
    pub fn failed() -> Self {
        Self {
            commit_hash: ERROR_SENTINEL.to_string(),
            commit_date: ERROR_SENTINEL.to_string(),
            commit_count: ERROR_SENTINEL.to_string(),
            tag: ERROR_SENTINEL.to_string(),
        }
    }
}

/// Outcome of inspecting one submodule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmoduleState {
    /// Path does not exist on disk
    Missing,
    /// Path exists but hash, date or count could not be read
    Failed,
    /// Path exists and was inspected
    Present(GitStatus),
}

impl SubmoduleState {
    /// Short lowercase label used by the JSON report
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Failed => "failed",
            Self::Present(_) => "present",
        }
    }
}

/// A manifest record together with its inspected state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Manifest entry
    pub record: SubmoduleRecord,
    /// Inspection outcome
    pub state: SubmoduleState,
}

/// One line of the "Project Structure" section
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StructureEntry {
    /// Directory, rendered in bold
    pub path: String,
    /// What lives there
    pub description: String,
}

impl StructureEntry {
    /// Construct an entry
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

/// Everything needed to render one dashboard
#[derive(Debug, Clone)]
pub struct Report {
    /// Document title
    pub title: String,
    /// Wall-clock time at collection start, `YYYY-MM-DD HH:MM:SS`
    pub generated_at: String,
    /// Static project layout description
    pub structure: Vec<StructureEntry>,
    /// One row per submodule in manifest order
    pub rows: Vec<StatusRow>,
}

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown dashboard
    #[default]
    Markdown,
    /// JSON report
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{}' (expected markdown or json)",
                other
            ))),
        }
    }
}

/// Which implementation answers git queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeBackend {
    /// Spawn the `git` executable
    #[default]
    Cli,
    /// Use libgit2 in-process
    LibGit2,
}

impl FromStr for ProbeBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cli" | "git" => Ok(Self::Cli),
            "libgit2" | "git2" => Ok(Self::LibGit2),
            other => Err(Error::Config(format!(
                "unknown backend '{}' (expected cli or libgit2)",
                other
            ))),
        }
    }
}
