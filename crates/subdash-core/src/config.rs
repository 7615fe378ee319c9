//! Dashboard configuration: YAML file plus per-run settings

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::manifest::reader::DEFAULT_MANIFEST_PATH;
use crate::patterns::PatternMatcher;
use crate::types::{OutputFormat, ProbeBackend, StructureEntry};

/// Optional configuration file looked up in the root directory
pub const DEFAULT_CONFIG_PATH: &str = ".subdash.yml";

/// Where the dashboard is written
pub const DEFAULT_OUTPUT_PATH: &str = "docs/SUBMODULES.md";

/// Document title used when none is configured
pub const DEFAULT_TITLE: &str = "Submodule Dashboard";

/// Built-in "Project Structure" section
pub fn default_structure() -> Vec<StructureEntry> {
    vec![
        StructureEntry::new(
            "core/",
            "Contains the core logic of the filez application (scanning, hashing, database, etc.).",
        ),
        StructureEntry::new("cli/", "Contains the Command Line Interface (CLI) application."),
        StructureEntry::new(
            "libs/",
            "Contains all external dependencies included as git submodules.",
        ),
        StructureEntry::new("docs/", "Project documentation."),
        StructureEntry::new("benchmarks/", "Performance benchmarks."),
        StructureEntry::new("tests/", "Unit and integration tests."),
        StructureEntry::new("vcpkg/", "The vcpkg package manager submodule."),
    ]
}

/// Contents of the YAML configuration file
///
/// ```yaml
/// title: Submodule Dashboard
/// structure:
///   - path: core/
///     description: Core library.
/// include: ["libs/**"]
/// exclude: ["vcpkg"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Document title
    pub title: String,
    /// Project structure entries, in display order
    pub structure: Vec<StructureEntry>,
    /// Glob patterns selecting submodules by path or name
    pub include: Vec<String>,
    /// Glob patterns dropping submodules by path or name
    pub exclude: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            structure: default_structure(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Parse YAML text; an empty document yields the defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Load a configuration file if present, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(yaml) => {
                tracing::debug!(path = %path.display(), "loading dashboard config");
                Self::from_yaml(&yaml)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::Config(format!(
                "failed to read config '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Config("title must not be empty".to_string()));
        }
        if let Some(entry) = self.structure.iter().find(|e| e.path.trim().is_empty()) {
            return Err(Error::Config(format!(
                "structure entry '{}' has an empty path",
                entry.description
            )));
        }
        Ok(())
    }

    /// Compile the include/exclude patterns
    pub fn matcher(&self) -> Result<PatternMatcher> {
        PatternMatcher::new(self.include.as_slice(), self.exclude.as_slice())
    }
}

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Directory relative paths are resolved against
    pub root: PathBuf,
    /// Manifest path, relative to `root` unless absolute
    pub manifest: PathBuf,
    /// Output path, relative to `root` unless absolute
    pub output: PathBuf,
    /// Document format
    pub format: OutputFormat,
    /// Git backend
    pub backend: ProbeBackend,
    /// Executable used by the CLI backend
    pub git_program: OsString,
    /// Title, structure and filters
    pub dashboard: DashboardConfig,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: PathBuf::from(DEFAULT_MANIFEST_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: OutputFormat::default(),
            backend: ProbeBackend::default(),
            git_program: OsString::from("git"),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl RunSettings {
    /// Defaults rooted at `root`
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolve a path against the root directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute-or-rooted manifest location
    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(&self.manifest)
    }

    /// Absolute-or-rooted output location
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.title, "Submodule Dashboard");
        assert_eq!(config.structure.len(), 7);
        assert_eq!(config.structure[0].path, "core/");
        assert!(config.matcher().unwrap().is_unrestricted());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(DashboardConfig::from_yaml("  \n").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = DashboardConfig::from_yaml("title: Engine Dependencies\n").unwrap();
        assert_eq!(config.title, "Engine Dependencies");
        assert_eq!(config.structure, default_structure());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
title: Deps
structure:
  - path: src/
    description: Sources.
include:
  - "libs/**"
exclude:
  - vcpkg
"#;
        let config = DashboardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.structure, vec![StructureEntry::new("src/", "Sources.")]);
        assert_eq!(config.include, ["libs/**"]);
        assert_eq!(config.exclude, ["vcpkg"]);
        assert!(!config.matcher().unwrap().is_unrestricted());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_matches!(DashboardConfig::from_yaml("titel: typo\n"), Err(Error::Yaml(_)));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_matches!(DashboardConfig::from_yaml("title: ''\n"), Err(Error::Config(_)));
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        assert_eq!(DashboardConfig::load_or_default(&path).unwrap(), DashboardConfig::default());

        std::fs::write(&path, "exclude: [\"third_party/*\"]\n").unwrap();
        let config = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(config.exclude, ["third_party/*"]);
    }

    #[test]
    fn test_load_requires_file() {
        let dir = TempDir::new().unwrap();
        assert_matches!(
            DashboardConfig::load(&dir.path().join("missing.yml")),
            Err(Error::Config(_))
        );
    }

    #[test]
    fn test_run_settings_resolve() {
        let settings = RunSettings::with_root("/work/project");
        assert_eq!(settings.manifest_path(), PathBuf::from("/work/project/.gitmodules"));
        assert_eq!(
            settings.output_path(),
            PathBuf::from("/work/project/docs/SUBMODULES.md")
        );
        assert_eq!(settings.git_program, OsString::from("git"));
    }
}
