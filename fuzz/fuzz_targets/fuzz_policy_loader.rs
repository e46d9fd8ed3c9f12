#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use routelint::config::PolicyConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        // Only panics matter here
        let _ = PolicyConfig::from_yaml_str(Path::new("fuzz.yaml"), yaml_str);
    }
});
