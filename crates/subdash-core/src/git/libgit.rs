//! In-process status probe backed by libgit2

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use git2::{DescribeFormatOptions, DescribeOptions, Repository};

use crate::error::{Error, Result};
use crate::traits::StatusProbe;

/// Answers status queries with `git2` instead of spawning processes.
///
/// The repository is discovered upward from the submodule path, the same way
/// the `git` executable finds it.
///
/// Short hashes follow `core.abbrev` when it is set to a number. Without it
/// libgit2 starts at 7 characters and only grows the id to stay unique,
/// whereas `git rev-parse --short` also scales the length with the object
/// count, so very large repositories may show a longer hash with the CLI
/// backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibGit2Probe;

impl LibGit2Probe {
    /// Create the probe
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<Repository> {
        Ok(Repository::discover(path)?)
    }
}

/// Format a commit time as `YYYY-MM-DD` in the commit's own offset
pub(crate) fn format_commit_date(time: git2::Time) -> Result<String> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
        Error::Git(format!("invalid timezone offset: {} minutes", time.offset_minutes()))
    })?;
    let utc = DateTime::from_timestamp(time.seconds(), 0)
        .ok_or_else(|| Error::Git(format!("invalid commit timestamp: {}", time.seconds())))?;

    Ok(utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
}

impl StatusProbe for LibGit2Probe {
    fn short_hash(&self, path: &Path) -> Result<String> {
        let repo = Self::open(path)?;
        let commit = repo.head()?.peel_to_commit()?;
        let short = commit.as_object().short_id()?;

        short
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Git("short id is not valid UTF-8".to_string()))
    }

    fn commit_date(&self, path: &Path) -> Result<String> {
        let repo = Self::open(path)?;
        let commit = repo.head()?.peel_to_commit()?;
        let when = commit.committer().when();
        format_commit_date(when)
    }

    fn commit_count(&self, path: &Path) -> Result<String> {
        let repo = Self::open(path)?;
        let mut walk = repo.revwalk()?;
        walk.push_head()?;

        let count = walk.try_fold(0u64, |n, oid| oid.map(|_| n + 1))?;
        Ok(count.to_string())
    }

    fn latest_tag(&self, path: &Path) -> Result<String> {
        let repo = Self::open(path)?;

        let mut opts = DescribeOptions::new();
        opts.describe_tags();
        let describe = repo.describe(&opts)?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        Ok(describe.format(Some(&format))?)
    }
}
