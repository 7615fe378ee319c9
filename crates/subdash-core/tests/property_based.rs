//! Property-based tests using proptest

use proptest::prelude::*;
use subdash_core::manifest::{DropReason, ManifestParser};

#[derive(Debug, Clone)]
struct Block {
    name: String,
    path: String,
    url: String,
    has_path: bool,
    has_url: bool,
    url_first: bool,
    indent: &'static str,
}

impl Block {
    fn render(&self) -> String {
        let mut out = format!("[submodule \"{}\"]\n", self.name);
        let path_line = format!("{}path = {}\n", self.indent, self.path);
        let url_line = format!("{}url = {}\n", self.indent, self.url);

        let mut lines = Vec::new();
        if self.has_path {
            lines.push(path_line);
        }
        if self.has_url {
            lines.push(url_line);
        }
        if self.url_first {
            lines.reverse();
        }
        for line in lines {
            out.push_str(&line);
        }
        out
    }

    fn complete(&self) -> bool {
        self.has_path && self.has_url
    }
}

fn arb_block() -> impl Strategy<Value = Block> {
    (
        "[a-z][a-z0-9_-]{0,15}",
        "[a-z]{1,8}(/[a-z0-9_-]{1,12}){0,3}",
        "https://example\\.com/[a-z]{1,12}\\.git",
        prop::bool::weighted(0.85),
        prop::bool::weighted(0.85),
        any::<bool>(),
        prop_oneof![Just("\t"), Just("    "), Just("")],
    )
        .prop_map(|(name, path, url, has_path, has_url, url_first, indent)| Block {
            name,
            path,
            url,
            has_path,
            has_url,
            url_first,
            indent,
        })
}

proptest! {
    #[test]
    fn test_complete_blocks_become_records_in_order(
        blocks in prop::collection::vec(arb_block(), 0..20)
    ) {
        let content: String = blocks.iter().map(Block::render).collect::<Vec<_>>().join("\n");
        let parsed = ManifestParser::parse(&content);

        let expected: Vec<(&str, &str, &str)> = blocks
            .iter()
            .filter(|b| b.complete())
            .map(|b| (b.name.as_str(), b.path.as_str(), b.url.as_str()))
            .collect();
        let actual: Vec<(&str, &str, &str)> = parsed
            .records
            .iter()
            .map(|r| (r.name.as_str(), r.path.as_str(), r.url.as_str()))
            .collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(
            parsed.diagnostics.len(),
            blocks.iter().filter(|b| !b.complete()).count()
        );
    }

    #[test]
    fn test_every_record_has_a_path(content in "(\\[submodule \"[a-z]{1,4}\"\\]\n|path ?= ?[a-z/]{0,6}\n|url = [a-z]{0,6}\n|\n){0,30}") {
        let parsed = ManifestParser::parse(&content);
        for record in &parsed.records {
            prop_assert!(!record.path.is_empty());
            prop_assert!(!record.url.is_empty());
        }
    }

    #[test]
    fn test_parser_never_panics(content in "\\PC{0,400}") {
        let _ = ManifestParser::parse(&content);
    }

    #[test]
    fn test_missing_path_is_diagnosed(name in "[a-z]{1,10}", url in "[a-z]{1,10}") {
        let parsed = ManifestParser::parse(&format!("[submodule \"{}\"]\nurl = {}\n", name, url));
        prop_assert!(parsed.records.is_empty());
        prop_assert_eq!(parsed.diagnostics.len(), 1);
        prop_assert_eq!(parsed.diagnostics[0].reason, DropReason::MissingPath);
        prop_assert_eq!(parsed.diagnostics[0].name.as_deref(), Some(name.as_str()));
    }
}
