#![forbid(unsafe_code)]

//! Internationalization for Rukn components.
//!
//! Provides key-based string lookup with a language fallback chain,
//! `{name}` placeholder interpolation, and text direction for a language tag.
//!
//! # Role in Rukn
//! Components carry translation keys (`footer.brand`, `nav.home`) rather
//! than literal text. `rukn-i18n` resolves those keys for the active
//! language, falling back to the catalog's default language, and leaves the
//! caller's existing text alone when neither has the key.

pub mod catalog;

pub use catalog::{
    I18nError, LocaleStrings, StringCatalog, TextDirection, direction, interpolate,
};
