//! Submodule selection patterns

pub mod matcher;

pub use matcher::PatternMatcher;
