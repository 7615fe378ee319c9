#![no_main]
use libfuzzer_sys::fuzz_target;
use subdash_core::patterns::PatternMatcher;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, '\n');
        let include: Vec<&str> = parts.next().into_iter().filter(|p| !p.is_empty()).collect();
        let exclude: Vec<&str> = parts.next().into_iter().filter(|p| !p.is_empty()).collect();
        let candidate = parts.next().unwrap_or("");

        if let Ok(matcher) = PatternMatcher::new(include.as_slice(), exclude.as_slice()) {
            let _ = matcher.matches(candidate);
        }
    }
});
