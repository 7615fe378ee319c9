//! Git status backends

pub mod cli;
pub mod libgit;

#[cfg(test)]
pub(crate) mod fixture;

pub use cli::GitCli;
pub use libgit::LibGit2Probe;
