//! Submodule manifest reading

pub mod parser;
pub mod reader;

pub use parser::{DropReason, ManifestDiagnostic, ManifestParser, ParsedManifest};
pub use reader::{Manifest, ManifestReader};
