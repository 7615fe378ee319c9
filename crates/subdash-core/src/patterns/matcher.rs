//! Glob-based submodule selection

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::Result;
use crate::types::SubmoduleRecord;

/// Include/exclude matcher with precompiled glob patterns.
///
/// A submodule is selected when its path or name matches an include pattern
/// (or no includes are configured) and neither matches an exclude pattern.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl PatternMatcher {
    /// Compile include and exclude patterns
    pub fn new<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self> {
        Ok(Self {
            include_set: Self::build(includes)?,
            exclude_set: Self::build(excludes)?,
        })
    }

    /// Matcher that selects everything
    pub fn all() -> Self {
        Self {
            include_set: GlobSet::empty(),
            exclude_set: GlobSet::empty(),
        }
    }

    fn build<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern.as_ref())?);
        }
        Ok(builder.build()?)
    }

    /// Whether nothing is filtered out
    pub fn is_unrestricted(&self) -> bool {
        self.include_set.is_empty() && self.exclude_set.is_empty()
    }

    /// Check one candidate string
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        if self.exclude_set.is_match(candidate) {
            return false;
        }
        self.include_set.is_empty() || self.include_set.is_match(candidate)
    }

    /// Check a record by path or name; exclusions on either win
    pub fn matches_record(&self, record: &SubmoduleRecord) -> bool {
        if self.exclude_set.is_match(&record.path) || self.exclude_set.is_match(&record.name) {
            return false;
        }
        self.include_set.is_empty()
            || self.include_set.is_match(&record.path)
            || self.include_set.is_match(&record.name)
    }

    /// Keep selected records, preserving order
    pub fn filter(&self, records: Vec<SubmoduleRecord>) -> Vec<SubmoduleRecord> {
        if self.is_unrestricted() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| {
                let keep = self.matches_record(record);
                if !keep {
                    tracing::debug!(name = %record.name, path = %record.path, "submodule filtered out");
                }
                keep
            })
            .collect()
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::all()
    }
}
