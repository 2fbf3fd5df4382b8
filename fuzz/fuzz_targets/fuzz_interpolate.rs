#![no_main]

use libfuzzer_sys::fuzz_target;
use rukn_i18n::{direction, interpolate};

fuzz_target!(|data: &[u8]| {
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };

    let out = interpolate(template, &[("year", "2026"), ("name", "")]);
    if !template.contains('{') {
        assert_eq!(out, template);
    }
    let _ = direction(template);
});
