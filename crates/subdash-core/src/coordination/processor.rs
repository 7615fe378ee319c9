//! Dashboard pipeline: manifest → filter → per-submodule status → report

use std::path::{Path, PathBuf};

use crate::config::RunSettings;
use crate::error::Result;
use crate::manifest::ManifestReader;
use crate::traits::StatusProbe;
use crate::types::{Report, StatusRow, SubmoduleRecord, SubmoduleState};

/// Timestamp format of the "Last Updated" line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inspects submodules one after another with a status probe
pub struct StatusCollector<'a, P> {
    root: &'a Path,
    probe: P,
}

impl<'a, P: StatusProbe> StatusCollector<'a, P> {
    /// Collector resolving submodule paths against `root`
    pub fn new(root: &'a Path, probe: P) -> Self {
        Self { root, probe }
    }

    fn checkout_dir(&self, record: &SubmoduleRecord) -> PathBuf {
        self.root.join(&record.path)
    }

    /// State of a single submodule
    pub fn state_of(&self, record: &SubmoduleRecord) -> SubmoduleState {
        let dir = self.checkout_dir(record);
        if !dir.exists() {
            tracing::debug!(name = %record.name, path = %dir.display(), "submodule missing");
            return SubmoduleState::Missing;
        }

        let state = self.probe.probe(&dir);
        if state == SubmoduleState::Failed {
            tracing::warn!(name = %record.name, path = %dir.display(), "could not read git status");
        }
        state
    }

    /// Inspect every record, preserving order
    pub fn collect(&self, records: Vec<SubmoduleRecord>) -> Vec<StatusRow> {
        records
            .into_iter()
            .map(|record| {
                let state = self.state_of(&record);
                StatusRow { record, state }
            })
            .collect()
    }
}

/// Runs the full collection for one invocation
pub struct DashboardProcessor<'a, P> {
    settings: &'a RunSettings,
    probe: P,
}

impl<'a, P: StatusProbe> DashboardProcessor<'a, P> {
    /// Create a processor
    pub fn new(settings: &'a RunSettings, probe: P) -> Self {
        Self { settings, probe }
    }

    /// Read the manifest, filter it and inspect each submodule
    pub fn process(self) -> Result<Report> {
        let manifest = ManifestReader::read(&self.settings.manifest_path())?;
        let matcher = self.settings.dashboard.matcher()?;
        let records = matcher.filter(manifest.records);

        let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        tracing::info!(submodules = records.len(), "collecting submodule status");

        let collector = StatusCollector::new(&self.settings.root, self.probe);
        let rows = collector.collect(records);

        Ok(Report {
            title: self.settings.dashboard.title.clone(),
            generated_at,
            structure: self.settings.dashboard.structure.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::git::{fixture, GitCli};
    use crate::types::GitStatus;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    /// Probe that always answers the same status
    struct Fixed;

    impl StatusProbe for Fixed {
        fn short_hash(&self, _: &Path) -> Result<String> {
            Ok("1a2b3c4".into())
        }
        fn commit_date(&self, _: &Path) -> Result<String> {
            Ok("2023-11-05".into())
        }
        fn commit_count(&self, _: &Path) -> Result<String> {
            Ok("128".into())
        }
        fn latest_tag(&self, _: &Path) -> Result<String> {
            Err(Error::Git("No names found, cannot describe anything.".into()))
        }
    }

    fn record(name: &str, path: &str) -> SubmoduleRecord {
        SubmoduleRecord {
            name: name.into(),
            path: path.into(),
            url: format!("https://example.com/{}.git", name),
        }
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let collector = StatusCollector::new(dir.path(), Fixed);
        assert_eq!(collector.state_of(&record("foo", "libs/foo")), SubmoduleState::Missing);
    }

    #[test]
    fn test_present_directory_is_probed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("libs/foo")).unwrap();
        let collector = StatusCollector::new(dir.path(), Fixed);
        assert_matches!(
            collector.state_of(&record("foo", "libs/foo")),
            SubmoduleState::Present(GitStatus { ref tag, .. }) if tag == "-"
        );
    }

    #[test]
    fn test_collect_preserves_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        let rows = StatusCollector::new(dir.path(), Fixed)
            .collect(vec![record("a", "a"), record("b", "b"), record("c", "c")]);

        let summary: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.record.name.as_str(), r.state.as_str()))
            .collect();
        assert_eq!(summary, [("a", "missing"), ("b", "present"), ("c", "missing")]);
    }

    #[test]
    fn test_process_without_manifest() {
        let dir = TempDir::new().unwrap();
        let settings = RunSettings::with_root(dir.path());
        let report = DashboardProcessor::new(&settings, Fixed).process().unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.title, "Submodule Dashboard");
        assert_eq!(report.generated_at.len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn test_process_applies_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gitmodules"),
            "[submodule \"zlib\"]\n\tpath = libs/zlib\n\turl = https://example.com/zlib.git\n\
             [submodule \"vcpkg\"]\n\tpath = vcpkg\n\turl = https://example.com/vcpkg.git\n",
        )
        .unwrap();

        let mut settings = RunSettings::with_root(dir.path());
        settings.dashboard.exclude = vec!["vcpkg".into()];
        let report = DashboardProcessor::new(&settings, Fixed).process().unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].record.name, "zlib");
        assert_eq!(report.rows[0].state, SubmoduleState::Missing);
    }

    #[test]
    fn test_process_real_submodules() {
        if !fixture::git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        fixture::init_repo(&dir.path().join("libs/tagged"), 2);
        fixture::tag(&dir.path().join("libs/tagged"), "v1.0.0");
        fs::create_dir_all(dir.path().join("libs/empty")).unwrap();
        fs::write(
            dir.path().join(".gitmodules"),
            "[submodule \"tagged\"]\n\tpath = libs/tagged\n\turl = u1\n\
             [submodule \"empty\"]\n\tpath = libs/empty\n\turl = u2\n",
        )
        .unwrap();

        let settings = RunSettings::with_root(dir.path());
        let report = DashboardProcessor::new(&settings, GitCli::new()).process().unwrap();

        assert_matches!(
            &report.rows[0].state,
            SubmoduleState::Present(GitStatus { tag, commit_count, .. })
                if tag == "v1.0.0" && commit_count == "2"
        );
        // A plain directory outside any repository cannot be described
        assert_eq!(report.rows[1].state, SubmoduleState::Failed);
    }
}
