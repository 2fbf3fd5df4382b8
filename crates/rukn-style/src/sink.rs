//! Explicit theme application and read-back.
//!
//! Token computation never touches a presentation context directly. A caller
//! hands [`ThemeTokens`] to a [`ThemeSink`] (a document root, a generated
//! stylesheet, a CSS-in-JS store) and reads live values back through a
//! [`ThemeSource`].

use crate::color::hsl_to_hex;
use crate::error::Result;
use crate::tokens::ThemeTokens;

/// Receives CSS custom property writes.
pub trait ThemeSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Exposes current CSS custom property values.
pub trait ThemeSource {
    fn property(&self, name: &str) -> Option<&str>;
}

/// Write every token onto the sink.
pub fn apply_tokens<S: ThemeSink + ?Sized>(tokens: &ThemeTokens, sink: &mut S) {
    for (name, value) in tokens.css_properties() {
        sink.set_property(name, &value);
    }
}

/// Read `--primary` back as `#rrggbb`, e.g. for a color picker's initial value.
///
/// Returns `Ok(None)` when the property is not set.
pub fn read_primary_hex<S: ThemeSource + ?Sized>(source: &S) -> Result<Option<String>> {
    source.property("--primary").map(hsl_to_hex).transpose()
}

/// An ordered in-memory sheet of custom properties.
///
/// Insertion order is preserved; re-setting a property updates it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    entries: Vec<(String, String)>,
}

impl CssVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        let mut vars = Self::new();
        apply_tokens(tokens, &mut vars);
        vars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Render as a single CSS rule.
    ///
    /// ```
    /// use rukn_style::{CssVariables, ThemeSink};
    ///
    /// let mut vars = CssVariables::new();
    /// vars.set_property("--ring", "0 0% 50%");
    /// assert_eq!(vars.to_css_rule(":root"), ":root {\n  --ring: 0 0% 50%;\n}\n");
    /// ```
    #[must_use]
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in &self.entries {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl ThemeSink for CssVariables {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }
}

impl ThemeSource for CssVariables {
    fn property(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }
}
