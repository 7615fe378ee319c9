#![no_main]
use libfuzzer_sys::fuzz_target;
use subdash_core::DashboardConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = DashboardConfig::from_yaml(s) {
            // Accepted configs must also compile or reject their globs cleanly
            let _ = config.matcher();
        }
    }
});
