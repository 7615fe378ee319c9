//! Trait seam between the collector and the git backends

use std::path::Path;

use crate::error::Result;
use crate::types::{GitStatus, SubmoduleState, NONE_SENTINEL};

/// Read-only git queries scoped to one working directory.
///
/// Implementors answer four independent questions about `HEAD`. The provided
/// [`StatusProbe::probe`] combines them: a failure in hash, date or count
/// turns the whole submodule into [`SubmoduleState::Failed`], while a tag
/// failure only degrades the tag to `-`.
pub trait StatusProbe {
    /// Abbreviated hash of `HEAD`
    fn short_hash(&self, path: &Path) -> Result<String>;

    /// Committer date of `HEAD`, `YYYY-MM-DD`
    fn commit_date(&self, path: &Path) -> Result<String>;

    /// Number of commits reachable from `HEAD`
    fn commit_count(&self, path: &Path) -> Result<String>;

    /// Most recent tag reachable from `HEAD`
    fn latest_tag(&self, path: &Path) -> Result<String>;

    /// Run all queries and fold them into a state
    fn probe(&self, path: &Path) -> SubmoduleState {
        let head = self.short_hash(path).and_then(|hash| {
            let date = self.commit_date(path)?;
            let count = self.commit_count(path)?;
            Ok((hash, date, count))
        });

        let (commit_hash, commit_date, commit_count) = match head {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = e.message(), "git status query failed");
                return SubmoduleState::Failed;
            }
        };

        let tag = match self.latest_tag(path) {
            Ok(tag) if !tag.is_empty() => tag,
            Ok(_) => NONE_SENTINEL.to_string(),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = e.message(), "no reachable tag");
                NONE_SENTINEL.to_string()
            }
        };

        SubmoduleState::Present(GitStatus {
            commit_hash,
            commit_date,
            commit_count,
            tag,
        })
    }
}

impl<P: StatusProbe + ?Sized> StatusProbe for &P {
    fn short_hash(&self, path: &Path) -> Result<String> {
        (**self).short_hash(path)
    }

    fn commit_date(&self, path: &Path) -> Result<String> {
        (**self).commit_date(path)
    }

    fn commit_count(&self, path: &Path) -> Result<String> {
        (**self).commit_count(path)
    }

    fn latest_tag(&self, path: &Path) -> Result<String> {
        (**self).latest_tag(path)
    }

    fn probe(&self, path: &Path) -> SubmoduleState {
        (**self).probe(path)
    }
}
