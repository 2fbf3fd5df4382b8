//! Theme token derivation from a single seed color.
//!
//! One seed hex produces five tokens:
//!
//! | Token                | Derivation                                          |
//! |----------------------|-----------------------------------------------------|
//! | `primary`            | seed                                                |
//! | `primary-foreground` | contrast tone for the seed lightness                |
//! | `accent`             | hue +20°, lightness +15 (≤ 96), saturation −10 (≥ 25) |
//! | `accent-foreground`  | contrast tone for the accent lightness              |
//! | `ring`               | seed hue/saturation, lightness +18 (≤ 98)           |
//!
//! Derivation is pure: tokens are recomputed on every seed change and only the
//! seed itself is ever persisted.

use crate::color::{Hsl, hex_to_hsl, try_hex_to_hsl};
use crate::error::Result;

/// Backgrounds lighter than this get [`FOREGROUND_ON_LIGHT`].
pub const FOREGROUND_THRESHOLD: u8 = 55;
/// Near-black text for light backgrounds.
pub const FOREGROUND_ON_LIGHT: Hsl = Hsl::new(0, 0, 12);
/// Near-white text for dark backgrounds.
pub const FOREGROUND_ON_DARK: Hsl = Hsl::new(0, 0, 98);

pub const ACCENT_HUE_SHIFT: i32 = 20;
pub const ACCENT_LIGHTNESS_LIFT: u8 = 15;
pub const ACCENT_LIGHTNESS_MAX: u8 = 96;
pub const ACCENT_SATURATION_DROP: u8 = 10;
pub const ACCENT_SATURATION_MIN: u8 = 25;
pub const RING_LIGHTNESS_LIFT: u8 = 18;
pub const RING_LIGHTNESS_MAX: u8 = 98;

/// Pick the contrast tone for a background of the given lightness.
///
/// The boundary is exclusive: 55 is still dark, 56 is light.
#[must_use]
pub const fn compute_foreground(lightness: u8) -> Hsl {
    if lightness > FOREGROUND_THRESHOLD {
        FOREGROUND_ON_LIGHT
    } else {
        FOREGROUND_ON_DARK
    }
}

/// Rotate a hue, wrapping into `[0, 360)` in both directions.
#[must_use]
pub fn shift_hue(hue: u16, shift_degrees: i32) -> u16 {
    let turn = i32::from(hue % 360) + shift_degrees.rem_euclid(360);
    turn.rem_euclid(360) as u16
}

/// The derived token set for one seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThemeTokens {
    pub primary: Hsl,
    pub primary_foreground: Hsl,
    pub accent: Hsl,
    pub accent_foreground: Hsl,
    pub ring: Hsl,
}

impl ThemeTokens {
    /// CSS custom property names, in the order [`css_properties`](Self::css_properties) yields them.
    pub const PROPERTY_NAMES: [&'static str; 5] = [
        "--primary",
        "--primary-foreground",
        "--accent",
        "--accent-foreground",
        "--ring",
    ];

    #[must_use]
    pub fn from_seed(seed: Hsl) -> Self {
        let accent = Hsl::new(
            shift_hue(seed.h, ACCENT_HUE_SHIFT),
            seed.s
                .saturating_sub(ACCENT_SATURATION_DROP)
                .max(ACCENT_SATURATION_MIN),
            seed.l
                .saturating_add(ACCENT_LIGHTNESS_LIFT)
                .min(ACCENT_LIGHTNESS_MAX),
        );
        let ring = seed.with_lightness(
            seed.l
                .saturating_add(RING_LIGHTNESS_LIFT)
                .min(RING_LIGHTNESS_MAX),
        );

        Self {
            primary: seed,
            primary_foreground: compute_foreground(seed.l),
            accent,
            accent_foreground: compute_foreground(accent.l),
            ring,
        }
    }

    /// `(custom property, "H S% L%")` pairs ready for a style sink.
    #[must_use]
    pub fn css_properties(&self) -> [(&'static str, String); 5] {
        let [primary, primary_fg, accent, accent_fg, ring] = Self::PROPERTY_NAMES;
        [
            (primary, self.primary.to_string()),
            (primary_fg, self.primary_foreground.to_string()),
            (accent, self.accent.to_string()),
            (accent_fg, self.accent_foreground.to_string()),
            (ring, self.ring.to_string()),
        ]
    }
}

/// Derive tokens from a seed hex, failing on malformed input.
pub fn derive_tokens(seed_hex: &str) -> Result<ThemeTokens> {
    let seed = try_hex_to_hsl(seed_hex)?;
    let tokens = ThemeTokens::from_seed(seed);
    tracing::debug!(seed = seed_hex, primary = %tokens.primary, accent = %tokens.accent, "derived theme tokens");
    Ok(tokens)
}

/// Derive tokens, substituting [`Hsl::FALLBACK`] for a malformed seed.
///
/// Use at rendering boundaries where a bad stored color must not block the UI.
#[must_use]
pub fn derive_tokens_or_fallback(seed_hex: &str) -> ThemeTokens {
    ThemeTokens::from_seed(hex_to_hsl(seed_hex))
}
