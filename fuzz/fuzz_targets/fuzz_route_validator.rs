#![no_main]

use libfuzzer_sys::fuzz_target;
use routelint::validator::{RouteFileValidator, Verdict};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let validator = RouteFileValidator::default();
        let report = validator.validate("fuzz.json", raw);

        // Verdict is derived only from ERROR findings
        assert_eq!(report.verdict == Verdict::Fail, report.error_count() > 0);
    }
});
