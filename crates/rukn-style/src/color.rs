//! RGB and HSL color values and the conversions between them.
//!
//! Hex strings are the persisted and user-facing representation; HSL is the
//! derivation space. HSL values serialize as `"H S% L%"`, the form used for
//! CSS custom properties consumed as `hsl(var(--primary))`.
//!
//! # Example
//!
//! ```
//! use rukn_style::color::{Hsl, hex_to_hsl, hsl_to_hex};
//!
//! assert_eq!(hex_to_hsl("#808080"), Hsl::new(0, 0, 50));
//! assert_eq!(hsl_to_hex("0 100% 50%").unwrap(), "#ff0000");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorError::malformed_hex(input));
        }
        let channel = |offset: usize| {
            u8::from_str_radix(&digits[offset..offset + 2], 16)
                .map_err(|_| ColorError::malformed_hex(input))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// An HSL color with integer components.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Substituted for malformed hex input by [`hex_to_hsl`].
    pub const FALLBACK: Self = Self::new(0, 100, 50);

    /// Components must already be in range; use [`Hsl::checked`] for
    /// untrusted values.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        debug_assert!(h < 360 && s <= 100 && l <= 100);
        Self { h, s, l }
    }

    pub fn checked(h: u16, s: u8, l: u8) -> Result<Self> {
        check_range("hue", f64::from(h), 0.0, 360.0, false)?;
        check_range("saturation", f64::from(s), 0.0, 100.0, true)?;
        check_range("lightness", f64::from(l), 0.0, 100.0, true)?;
        Ok(Self { h, s, l })
    }

    /// Convert from RGB, rounding each component to the nearest integer.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0, 0, percent(l));
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        // 359.5 and above rounds up to a full turn.
        let h = (sector / 6.0 * 360.0).round() as u16 % 360;
        Self::new(h, percent(s), percent(l))
    }

    /// Convert to RGB using the six 60-degree hue sectors.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h);
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h {
            0..60 => (c, x, 0.0),
            60..120 => (x, c, 0.0),
            120..180 => (0.0, c, x),
            180..240 => (0.0, x, c),
            240..300 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    #[must_use]
    pub const fn with_lightness(self, l: u8) -> Self {
        Self::new(self.h, self.s, l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    /// Parse `"H S% L%"`. Percent signs are optional and fractional values
    /// are rounded; anything out of range is rejected rather than wrapped.
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let (Some(h), Some(s), Some(l), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ColorError::malformed_hsl(input));
        };

        let h = parse_component(input, h)?;
        let s = parse_component(input, s.strip_suffix('%').unwrap_or(s))?;
        let l = parse_component(input, l.strip_suffix('%').unwrap_or(l))?;

        check_range("hue", h, 0.0, 360.0, false)?;
        check_range("saturation", s, 0.0, 100.0, true)?;
        check_range("lightness", l, 0.0, 100.0, true)?;

        Ok(Self::new(
            h.round() as u16 % 360,
            s.round() as u8,
            l.round() as u8,
        ))
    }
}

fn percent(unit: f64) -> u8 {
    (unit * 100.0).round() as u8
}

fn parse_component(input: &str, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ColorError::malformed_hsl(input))
}

fn check_range(
    component: &'static str,
    value: f64,
    min: f64,
    max: f64,
    inclusive: bool,
) -> Result<()> {
    let in_range = value >= min && if inclusive { value <= max } else { value < max };
    if in_range {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            component,
            value,
            min,
            max,
        })
    }
}

/// Strict hex to HSL conversion.
pub fn try_hex_to_hsl(input: &str) -> Result<Hsl> {
    Rgb::from_hex(input).map(Hsl::from_rgb)
}

/// Hex to HSL conversion that never fails.
///
/// Malformed input (wrong length or non-hex digits after stripping `#`)
/// yields [`Hsl::FALLBACK`] and logs a warning.
#[must_use]
pub fn hex_to_hsl(input: &str) -> Hsl {
    match try_hex_to_hsl(input) {
        Ok(hsl) => hsl,
        Err(error) => {
            tracing::warn!(%error, fallback = %Hsl::FALLBACK, "substituting fallback color");
            Hsl::FALLBACK
        }
    }
}

/// Convert an `"H S% L%"` string to lowercase `#rrggbb`.
pub fn hsl_to_hex(input: &str) -> Result<String> {
    input.parse::<Hsl>().map(Hsl::to_hex)
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Hsl, Rgb};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Hsl {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Hsl {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Rgb {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Rgb {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            Rgb::from_hex(&raw).map_err(D::Error::custom)
        }
    }
}
