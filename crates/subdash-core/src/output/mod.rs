//! Document rendering and writing

pub mod json_format;
pub mod markdown;
pub mod writer;

pub use markdown::{format_row, render_markdown};
pub use writer::OutputWriter;

use crate::error::Result;
use crate::types::{OutputFormat, Report};

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(report)),
        OutputFormat::Json => json_format::render_json(report),
    }
}
