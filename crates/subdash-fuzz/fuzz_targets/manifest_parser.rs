#![no_main]
use libfuzzer_sys::fuzz_target;
use subdash_core::manifest::ManifestParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = ManifestParser::parse(s);
        for record in &parsed.records {
            assert!(!record.path.is_empty());
            assert!(!record.url.is_empty());
        }
    }
});
