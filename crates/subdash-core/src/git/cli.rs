//! Status probe that shells out to the `git` executable

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::traits::StatusProbe;

/// Runs `git` with the submodule directory as working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Use `git` from PATH
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable
    pub fn with_program<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    /// Executable this probe spawns
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Run one query and return its trimmed stdout.
    ///
    /// With `quiet` set, stderr is discarded instead of captured for the error
    /// message.
    fn run(&self, path: &Path, args: &[&str], quiet: bool) -> Result<String> {
        let stderr = if quiet { Stdio::null() } else { Stdio::piped() };

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(path)
            .stdin(Stdio::null())
            .stderr(stderr)
            .output()
            .map_err(|e| {
                Error::Git(format!(
                    "failed to run {}: {}",
                    self.program.to_string_lossy(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "git {} failed ({}): {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusProbe for GitCli {
    fn short_hash(&self, path: &Path) -> Result<String> {
        self.run(path, &["rev-parse", "--short", "HEAD"], false)
    }

    fn commit_date(&self, path: &Path) -> Result<String> {
        self.run(path, &["log", "-1", "--format=%cd", "--date=short"], false)
    }

    fn commit_count(&self, path: &Path) -> Result<String> {
        self.run(path, &["rev-list", "--count", "HEAD"], false)
    }

    fn latest_tag(&self, path: &Path) -> Result<String> {
        self.run(path, &["describe", "--tags", "--abbrev=0"], true)
    }
}
