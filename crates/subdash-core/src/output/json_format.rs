//! JSON rendering of a dashboard report

use serde::Serialize;

use crate::error::Result;
use crate::types::{
    Report, StatusRow, StructureEntry, SubmoduleState, ERROR_SENTINEL, MISSING_MARKER,
    NONE_SENTINEL,
};

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_at: &'a str,
    structure: &'a [StructureEntry],
    submodules: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    name: &'a str,
    path: &'a str,
    url: &'a str,
    state: &'static str,
    tag: &'a str,
    commit: &'a str,
    date: &'a str,
    count: &'a str,
}

impl<'a> From<&'a StatusRow> for JsonRow<'a> {
    fn from(row: &'a StatusRow) -> Self {
        let (tag, commit, date, count) = match &row.state {
            SubmoduleState::Missing => (MISSING_MARKER, NONE_SENTINEL, NONE_SENTINEL, NONE_SENTINEL),
            SubmoduleState::Failed => (ERROR_SENTINEL, ERROR_SENTINEL, ERROR_SENTINEL, ERROR_SENTINEL),
            SubmoduleState::Present(s) => (
                s.tag.as_str(),
                s.commit_hash.as_str(),
                s.commit_date.as_str(),
                s.commit_count.as_str(),
            ),
        };

        Self {
            name: &row.record.name,
            path: &row.record.path,
            url: &row.record.url,
            state: row.state.as_str(),
            tag,
            commit,
            date,
            count,
        }
    }
}

/// Render the report as pretty-printed JSON with a trailing newline
pub fn render_json(report: &Report) -> Result<String> {
    let doc = JsonReport {
        title: &report.title,
        generated_at: &report.generated_at,
        structure: &report.structure,
        submodules: report.rows.iter().map(JsonRow::from).collect(),
    };

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
