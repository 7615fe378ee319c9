//! Scratch repositories for tests

use std::path::Path;
use std::process::Command;

/// Fixed committer date so `--date=short` output is predictable
pub const COMMIT_DATE: &str = "2024-03-01T12:00:00+00:00";

/// Whether a usable `git` executable is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir` with a hermetic identity, panicking on failure
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test User",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
            "-c",
            "init.defaultBranch=main",
        ])
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_DATE", COMMIT_DATE)
        .env("GIT_COMMITTER_DATE", COMMIT_DATE)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a repository at `dir` with `commits` commits
pub fn init_repo(dir: &Path, commits: usize) {
    std::fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q"]);
    for i in 0..commits {
        commit(dir, &format!("commit {}", i));
    }
}

/// Change a file and commit it
pub fn commit(dir: &Path, message: &str) {
    std::fs::write(dir.join("file.txt"), message).unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-q", "-m", message]);
}

/// Add a lightweight tag at `HEAD`
pub fn tag(dir: &Path, name: &str) {
    git(dir, &["tag", name]);
}
