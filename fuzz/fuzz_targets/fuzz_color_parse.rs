#![no_main]

use libfuzzer_sys::fuzz_target;
use rukn_style::{Hsl, hex_to_hsl, hsl_to_hex, try_hex_to_hsl};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let hsl = hex_to_hsl(input);
    assert!(hsl.h < 360 && hsl.s <= 100 && hsl.l <= 100);
    if try_hex_to_hsl(input).is_err() {
        assert_eq!(hsl, Hsl::FALLBACK);
    }

    if let Ok(hex) = hsl_to_hex(input) {
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        // Anything accepted once must survive canonical display and re-parse.
        let parsed: Hsl = input.parse().expect("accepted once");
        assert_eq!(parsed.to_string().parse::<Hsl>().ok(), Some(parsed));
    }
});
