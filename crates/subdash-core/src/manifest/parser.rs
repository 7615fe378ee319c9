//! Line-oriented `.gitmodules` parser
//!
//! A block starts at a `[submodule "NAME"]` header and runs until the next
//! section header or end of input. Only complete blocks (non-empty `path` and
//! `url`) become records; everything else is reported as a diagnostic.

use std::fmt;

use memchr::memchr;

use crate::types::SubmoduleRecord;

/// Why a manifest block was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Header is not `[submodule "NAME"]`
    MalformedHeader,
    /// No `path = ...` line
    MissingPath,
    /// `path` present but empty
    EmptyPath,
    /// No `url = ...` line
    MissingUrl,
    /// `url` present but empty
    EmptyUrl,
}

impl DropReason {
    /// Human-readable reason
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedHeader => "malformed submodule header",
            Self::MissingPath => "missing 'path'",
            Self::EmptyPath => "empty 'path'",
            Self::MissingUrl => "missing 'url'",
            Self::EmptyUrl => "empty 'url'",
        }
    }
}

/// A block that did not produce a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDiagnostic {
    /// 1-based line of the block header
    pub line: usize,
    /// Submodule name, when the header could be read
    pub name: Option<String>,
    /// Why the block was dropped
    pub reason: DropReason,
}

impl fmt::Display for ManifestDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(
                f,
                "line {}: submodule \"{}\" skipped: {}",
                self.line,
                name,
                self.reason.as_str()
            ),
            None => write!(f, "line {}: block skipped: {}", self.line, self.reason.as_str()),
        }
    }
}

/// Records and diagnostics produced from one manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Complete records in declaration order
    pub records: Vec<SubmoduleRecord>,
    /// Dropped blocks in declaration order
    pub diagnostics: Vec<ManifestDiagnostic>,
}

/// What a header line opens
enum Section {
    Submodule(String),
    Malformed(Option<String>),
    Other,
}

/// Block under construction
struct PendingBlock {
    line: usize,
    name: String,
    path: Option<String>,
    url: Option<String>,
}

impl PendingBlock {
    fn finish(self) -> Result<SubmoduleRecord, ManifestDiagnostic> {
        let reason = match (&self.path, &self.url) {
            (None, _) => Some(DropReason::MissingPath),
            (Some(p), _) if p.is_empty() => Some(DropReason::EmptyPath),
            (_, None) => Some(DropReason::MissingUrl),
            (_, Some(u)) if u.is_empty() => Some(DropReason::EmptyUrl),
            _ => None,
        };

        match (reason, self.path, self.url) {
            (None, Some(path), Some(url)) => Ok(SubmoduleRecord {
                name: self.name,
                path,
                url,
            }),
            (reason, _, _) => Err(ManifestDiagnostic {
                line: self.line,
                name: Some(self.name),
                reason: reason.unwrap_or(DropReason::MissingPath),
            }),
        }
    }
}

/// Parser for git's submodule manifest format
pub struct ManifestParser;

impl ManifestParser {
    /// Parse manifest text into records and diagnostics
    pub fn parse(content: &str) -> ParsedManifest {
        let mut parsed = ParsedManifest::default();
        let mut current: Option<PendingBlock> = None;

        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                if let Some(block) = current.take() {
                    Self::push(&mut parsed, block.finish());
                }

                match Self::parse_header(line) {
                    Section::Submodule(name) => {
                        current = Some(PendingBlock {
                            line: idx + 1,
                            name,
                            path: None,
                            url: None,
                        });
                    }
                    Section::Malformed(name) => {
                        parsed.diagnostics.push(ManifestDiagnostic {
                            line: idx + 1,
                            name,
                            reason: DropReason::MalformedHeader,
                        });
                    }
                    Section::Other => {}
                }
                continue;
            }

            let Some(block) = current.as_mut() else {
                continue;
            };

            if let Some((key, value)) = Self::parse_entry(line) {
                if key.eq_ignore_ascii_case("path") {
                    block.path = Some(value);
                } else if key.eq_ignore_ascii_case("url") {
                    block.url = Some(value);
                }
            }
        }

        if let Some(block) = current.take() {
            Self::push(&mut parsed, block.finish());
        }

        parsed
    }

    fn push(parsed: &mut ParsedManifest, outcome: Result<SubmoduleRecord, ManifestDiagnostic>) {
        match outcome {
            Ok(record) => parsed.records.push(record),
            Err(diag) => parsed.diagnostics.push(diag),
        }
    }

    /// Classify a `[...]` line
    fn parse_header(line: &str) -> Section {
        let Some(close) = line.rfind(']') else {
            return Section::Malformed(None);
        };
        let inner = line[1..close].trim();

        let (section, rest) = match inner.find(|c: char| c.is_whitespace() || c == '"') {
            Some(pos) => (&inner[..pos], inner[pos..].trim_start()),
            None => (inner, ""),
        };

        if !section.eq_ignore_ascii_case("submodule") {
            return Section::Other;
        }

        match Self::parse_quoted(rest) {
            Some(name) if !name.is_empty() => Section::Submodule(name),
            Some(_) => Section::Malformed(None),
            None => Section::Malformed(None),
        }
    }

    /// Read a `"..."` subsection name, honouring `\"` and `\\`
    fn parse_quoted(s: &str) -> Option<String> {
        let body = s.strip_prefix('"')?;
        let mut name = String::with_capacity(body.len());
        let mut chars = body.chars();

        while let Some(c) = chars.next() {
            match c {
                '"' => return chars.as_str().trim().is_empty().then_some(name),
                '\\' => name.push(chars.next()?),
                other => name.push(other),
            }
        }

        None
    }

    /// Split `key = value`, trimming both sides and unquoting the value
    fn parse_entry(line: &str) -> Option<(&str, String)> {
        let eq = memchr(b'=', line.as_bytes())?;
        let key = line[..eq].trim();
        if key.is_empty() {
            return None;
        }
        Some((key, Self::parse_value(line[eq + 1..].trim())))
    }

    fn parse_value(value: &str) -> String {
        if let Some((quoted, rest)) = Self::split_quoted(value) {
            let rest = rest.trim_start();
            if rest.is_empty() || rest.starts_with('#') || rest.starts_with(';') {
                return quoted;
            }
            return quoted + &Self::strip_comment(rest);
        }
        Self::strip_comment(value)
    }

    /// Leading `"..."` run of a value and whatever follows its closing quote
    fn split_quoted(value: &str) -> Option<(String, &str)> {
        let body = value.strip_prefix('"')?;
        let mut out = String::with_capacity(body.len());
        let mut chars = body.char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '"' => return Some((out, &body[i + 1..])),
                '\\' => out.push(chars.next()?.1),
                other => out.push(other),
            }
        }

        None
    }

    fn strip_comment(value: &str) -> String {
        // Inline comments need leading whitespace so URL fragments survive
        let bytes = value.as_bytes();
        let cut = bytes
            .windows(2)
            .position(|w| w[0].is_ascii_whitespace() && (w[1] == b'#' || w[1] == b';'))
            .unwrap_or(bytes.len());

        value[..cut].trim_end().to_string()
    }
}
