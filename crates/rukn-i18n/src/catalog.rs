//! String catalog with locale fallback.
//!
//! Lookup order for `get("ar-SA", key)`:
//!
//! 1. `ar-sa` (exact tag, case-insensitive)
//! 2. `ar` (primary subtag)
//! 3. the catalog's fallback locale
//!
//! A locale that exists but lacks the key still falls through, so a partial
//! translation never blanks out text.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("invalid locale tag: {tag:?}")]
    InvalidLocale { tag: String },

    #[error("locale already registered: {tag}")]
    DuplicateLocale { tag: String },
}

/// Translations for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.strings.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// All registered locales plus the default to fall back on.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    locales: HashMap<String, LocaleStrings>,
    fallback: String,
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StringCatalog {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            locales: HashMap::new(),
            fallback: normalize(&fallback.into()),
        }
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Register a locale. Tags are ASCII alphanumeric subtags joined by `-`
    /// or `_` and are stored lowercase with `-` separators.
    pub fn insert_locale(
        &mut self,
        tag: &str,
        strings: LocaleStrings,
    ) -> Result<(), I18nError> {
        let tag = validate_tag(tag)?;
        if self.locales.contains_key(&tag) {
            return Err(I18nError::DuplicateLocale { tag });
        }
        self.locales.insert(tag, strings);
        Ok(())
    }

    pub fn with_locale(mut self, tag: &str, strings: LocaleStrings) -> Result<Self, I18nError> {
        self.insert_locale(tag, strings)?;
        Ok(self)
    }

    /// Registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    #[must_use]
    pub fn locale(&self, tag: &str) -> Option<&LocaleStrings> {
        self.locales.get(&normalize(tag))
    }

    /// Resolve `key` for `lang`, walking the fallback chain.
    #[must_use]
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.chain(lang)
            .into_iter()
            .filter_map(|tag| self.locales.get(&tag))
            .find_map(|strings| strings.get(key))
    }

    /// Resolve `key` and substitute `{name}` placeholders from `args`.
    #[must_use]
    pub fn format(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(lang, key).map(|template| interpolate(template, args))
    }

    /// Keys present in the fallback locale but not resolvable from `lang`
    /// without falling back. Sorted.
    #[must_use]
    pub fn missing_keys(&self, lang: &str) -> Vec<&str> {
        let Some(base) = self.locales.get(&self.fallback) else {
            return Vec::new();
        };
        if normalize(lang).split('-').next() == Some(self.fallback.as_str()) {
            return Vec::new();
        }
        let own: Vec<&LocaleStrings> = self
            .chain(lang)
            .into_iter()
            .filter(|tag| *tag != self.fallback)
            .filter_map(|tag| self.locales.get(&tag))
            .collect();
        let mut missing: Vec<_> = base
            .keys()
            .filter(|key| !own.iter().any(|strings| strings.contains_key(key)))
            .collect();
        missing.sort_unstable();
        missing
    }

    fn chain(&self, lang: &str) -> Vec<String> {
        let exact = normalize(lang);
        let mut chain = Vec::with_capacity(3);
        if let Some((primary, _)) = exact.split_once('-') {
            let primary = primary.to_string();
            chain.push(exact);
            chain.push(primary);
        } else if !exact.is_empty() {
            chain.push(exact);
        }
        if !chain.contains(&self.fallback) {
            chain.push(self.fallback.clone());
        }
        chain
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn validate_tag(tag: &str) -> Result<String, I18nError> {
    let normalized = normalize(tag);
    let valid = !normalized.is_empty()
        && normalized
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric()));
    if valid {
        Ok(normalized)
    } else {
        Err(I18nError::InvalidLocale {
            tag: tag.to_string(),
        })
    }
}

/// Replace each `{name}` in `template` with its value from `args`.
///
/// Unknown placeholders and unbalanced braces are kept verbatim.
///
/// ```
/// use rukn_i18n::interpolate;
///
/// let text = interpolate("© {year} Rukn", &[("year", "2026")]);
/// assert_eq!(text, "© 2026 Rukn");
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let name = &after[..close];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Writing direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for an HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

const RTL_LANGUAGES: [&str; 6] = ["ar", "fa", "he", "ps", "ur", "yi"];

/// Direction for a language tag, decided by its primary subtag.
#[must_use]
pub fn direction(lang: &str) -> TextDirection {
    let tag = normalize(lang);
    let primary = tag.split('-').next().unwrap_or_default();
    if RTL_LANGUAGES.contains(&primary) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        StringCatalog::new("en")
            .with_locale(
                "en",
                LocaleStrings::new()
                    .with("footer.brand", "Rukn Design System")
                    .with("nav.home", "Home")
                    .with("footer.license", "MIT Licensed • © {year} Rukn Design System"),
            )
            .unwrap()
            .with_locale(
                "ar",
                LocaleStrings::new()
                    .with("footer.brand", "نظام ركن للتصميم")
                    .with("footer.license", "مرخص MIT • © {year} ركن"),
            )
            .unwrap()
            .with_locale("ar-EG", LocaleStrings::new().with("nav.home", "البيت"))
            .unwrap()
    }

    // ── Lookup ──────────────────────────────────────────────────────

    #[test]
    fn exact_locale_wins() {
        assert_eq!(catalog().get("ar", "footer.brand"), Some("نظام ركن للتصميم"));
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        assert_eq!(catalog().get("ar", "nav.home"), Some("Home"));
    }

    #[test]
    fn unknown_locale_uses_default() {
        assert_eq!(catalog().get("fr", "footer.brand"), Some("Rukn Design System"));
        assert_eq!(catalog().get("", "nav.home"), Some("Home"));
    }

    #[test]
    fn region_falls_back_to_primary_subtag() {
        let catalog = catalog();
        assert_eq!(catalog.get("ar-EG", "nav.home"), Some("البيت"));
        assert_eq!(catalog.get("ar_eg", "footer.brand"), Some("نظام ركن للتصميم"));
        assert_eq!(catalog.get("ar-SA", "footer.brand"), Some("نظام ركن للتصميم"));
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(catalog().get("en", "nav.nowhere"), None);
    }

    #[test]
    fn empty_translation_is_still_a_translation() {
        let catalog = StringCatalog::new("en")
            .with_locale("en", LocaleStrings::new().with("k", "fallback"))
            .unwrap()
            .with_locale("de", LocaleStrings::new().with("k", ""))
            .unwrap();
        assert_eq!(catalog.get("de", "k"), Some(""));
    }

    #[test]
    fn format_substitutes_year() {
        let text = catalog().format("en", "footer.license", &[("year", "2026")]);
        assert_eq!(text.as_deref(), Some("MIT Licensed • © 2026 Rukn Design System"));
    }

    // ── Registration ────────────────────────────────────────────────

    #[test]
    fn duplicate_locale_is_rejected() {
        let err = catalog()
            .with_locale("AR", LocaleStrings::new())
            .unwrap_err();
        assert_eq!(err, I18nError::DuplicateLocale { tag: "ar".into() });
    }

    #[test]
    fn invalid_tags_are_rejected() {
        for tag in ["", " ", "en--us", "en-", "e n", "ar!"] {
            let err = StringCatalog::default()
                .insert_locale(tag, LocaleStrings::new())
                .unwrap_err();
            assert!(matches!(err, I18nError::InvalidLocale { .. }), "{tag:?}");
        }
    }

    #[test]
    fn locales_are_sorted_and_normalized() {
        assert_eq!(catalog().locales(), vec!["ar", "ar-eg", "en"]);
        assert!(catalog().locale("AR_EG").is_some());
    }

    #[test]
    fn missing_keys_reports_untranslated_entries() {
        let catalog = catalog();
        assert_eq!(catalog.missing_keys("ar"), vec!["nav.home"]);
        assert!(catalog.missing_keys("ar-EG").is_empty());
        assert!(catalog.missing_keys("en").is_empty());
        assert_eq!(catalog.missing_keys("fr").len(), 3);
    }

    // ── Interpolation ───────────────────────────────────────────────

    #[test]
    fn interpolate_replaces_every_occurrence() {
        assert_eq!(
            interpolate("{a}-{b}-{a}", &[("a", "1"), ("b", "2")]),
            "1-2-1"
        );
    }

    #[test]
    fn interpolate_keeps_unknown_and_unbalanced() {
        assert_eq!(interpolate("{who} {", &[]), "{who} {");
        assert_eq!(interpolate("a } b", &[]), "a } b");
        assert_eq!(interpolate("{{year}}", &[("year", "2026")]), "{2026}");
    }

    // ── Direction ───────────────────────────────────────────────────

    #[test]
    fn arabic_is_rtl() {
        assert_eq!(direction("ar"), TextDirection::Rtl);
        assert_eq!(direction("ar-EG").as_str(), "rtl");
        assert_eq!(direction("en"), TextDirection::Ltr);
        assert_eq!(direction(""), TextDirection::Ltr);
    }

    proptest::proptest! {
        #[test]
        fn interpolate_without_braces_is_identity(text in "[^{}]{0,64}") {
            proptest::prop_assert_eq!(interpolate(&text, &[("x", "y")]), text);
        }
    }
}
