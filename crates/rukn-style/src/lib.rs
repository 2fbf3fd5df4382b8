#![forbid(unsafe_code)]

//! Seed-color theming for the Rukn design system.
//!
//! # Role in Rukn
//! `rukn-style` turns one user-chosen accent color into the small set of CSS
//! custom properties every component reads (`--primary`, `--accent`,
//! `--ring` and their foregrounds). It is pure and deterministic: no I/O,
//! no global state, no presentation context.
//!
//! # This crate provides
//! - [`Rgb`] and [`Hsl`] color values with hex and `"H S% L%"` forms.
//! - [`ThemeTokens`] and [`derive_tokens`] for the derivation policy.
//! - [`ThemeSink`] / [`ThemeSource`] seams plus the in-memory
//!   [`CssVariables`] sheet for applying and reading back a theme.
//!
//! # Failure policy
//! Strict entry points return [`ColorError`]. The `*_or_fallback` and
//! [`hex_to_hsl`] variants substitute [`Hsl::FALLBACK`] and log a warning so
//! a bad stored color never blocks rendering.

/// RGB/HSL values and conversions.
pub mod color;
/// Color parsing errors.
pub mod error;
/// Applying tokens to, and reading them back from, a style context.
pub mod sink;
/// Token derivation policy.
pub mod tokens;

pub use color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex, try_hex_to_hsl};
pub use error::{ColorError, ColorErrorKind, Result};
pub use sink::{CssVariables, ThemeSink, ThemeSource, apply_tokens, read_primary_hex};
pub use tokens::{
    ThemeTokens, compute_foreground, derive_tokens, derive_tokens_or_fallback, shift_hue,
};
