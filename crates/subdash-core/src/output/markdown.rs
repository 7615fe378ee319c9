//! Markdown dashboard rendering

use std::fmt::Write;

use crate::types::{
    Report, StatusRow, SubmoduleState, ERROR_SENTINEL, MISSING_MARKER, NONE_SENTINEL,
};

/// Column header of the status table
pub const TABLE_HEADER: &str = "| Name | Path | Version (Tag) | Commit | Date | Build # | URL |";

/// Separator line under the header
pub const TABLE_SEPARATOR: &str = "|---|---|---|---|---|---|---|";

/// Escape characters that would split a table cell
fn cell(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains('|') {
        std::borrow::Cow::Owned(value.replace('|', "\\|"))
    } else {
        std::borrow::Cow::Borrowed(value)
    }
}

/// Render one table row, without the trailing newline
pub fn format_row(row: &StatusRow) -> String {
    let record = &row.record;
    let name = cell(&record.name);
    let path = cell(&record.path);
    let url = cell(&record.url);

    match &row.state {
        SubmoduleState::Missing => format!(
            "| {name} | `{path}` | {MISSING_MARKER} | {NONE_SENTINEL} | {NONE_SENTINEL} | {NONE_SENTINEL} | [Link]({url}) |"
        ),
        SubmoduleState::Failed => format!(
            "| {name} | `{path}` | {e} | `{e}` | {e} | {e} | [Link]({url}) |",
            e = ERROR_SENTINEL
        ),
        SubmoduleState::Present(status) => format!(
            "| {name} | `{path}` | {} | `{}` | {} | {} | [Link]({url}) |",
            cell(&status.tag),
            cell(&status.commit_hash),
            cell(&status.commit_date),
            cell(&status.commit_count),
        ),
    }
}

/// Render the full dashboard document
pub fn render_markdown(report: &Report) -> String {
    let mut md = String::with_capacity(1024 + report.rows.len() * 128);

    let _ = writeln!(md, "# {}\n", report.title);
    let _ = writeln!(md, "**Last Updated:** {}\n", report.generated_at);

    md.push_str("## Project Structure\n\n");
    md.push_str("The project is organized as follows:\n\n");
    for entry in &report.structure {
        let _ = writeln!(md, "- **{}**: {}", entry.path, entry.description);
    }
    md.push('\n');

    md.push_str("## Submodules Status\n\n");
    md.push_str(TABLE_HEADER);
    md.push('\n');
    md.push_str(TABLE_SEPARATOR);
    md.push('\n');

    for row in &report.rows {
        md.push_str(&format_row(row));
        md.push('\n');
    }

    md
}
