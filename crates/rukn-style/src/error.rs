//! Error types for color parsing and token derivation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

/// A color value that could not be turned into a valid HSL triple.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Input is not six hex digits after stripping a leading `#`.
    #[error("invalid hex color {input:?}: expected 6 hex digits")]
    MalformedHex { input: String },

    /// Input does not split into three numeric `H S% L%` components.
    #[error("invalid HSL color {input:?}: expected \"H S% L%\"")]
    MalformedHsl { input: String },

    /// A parsed HSL component lies outside its valid range.
    #[error("HSL {component} value {value} is outside {min}..{max}")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Coarse classification shared by every [`ColorError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorErrorKind {
    InvalidColorFormat,
}

impl ColorError {
    #[must_use]
    pub fn kind(&self) -> ColorErrorKind {
        ColorErrorKind::InvalidColorFormat
    }

    pub(crate) fn malformed_hex(input: &str) -> Self {
        Self::MalformedHex {
            input: input.to_string(),
        }
    }

    pub(crate) fn malformed_hsl(input: &str) -> Self {
        Self::MalformedHsl {
            input: input.to_string(),
        }
    }
}
