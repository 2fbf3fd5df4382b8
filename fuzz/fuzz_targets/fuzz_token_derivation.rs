#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rukn_style::{CssVariables, Rgb, ThemeSource, derive_tokens, shift_hue};

#[derive(Debug, Arbitrary)]
struct Input {
    rgb: [u8; 3],
    hue: u16,
    shift: i32,
}

fuzz_target!(|input: Input| {
    let [r, g, b] = input.rgb;
    let seed = Rgb::new(r, g, b).to_hex();
    let tokens = derive_tokens(&seed).expect("canonical hex always derives");

    assert!(tokens.accent.l <= 96);
    assert!(tokens.accent.s >= 25);
    assert!(tokens.ring.l <= 98);

    let vars = CssVariables::from_tokens(&tokens);
    assert_eq!(vars.len(), 5);
    assert!(vars.property("--ring").is_some());

    let shifted = shift_hue(input.hue % 360, input.shift);
    assert!(shifted < 360);
});
