//! Theme subcommands: derive, convert, apply, read back, reset.

use std::path::Path;

use clap::{Args, ValueEnum};
use rukn_style::{
    CssVariables, Rgb, ThemeTokens, derive_tokens, derive_tokens_or_fallback, hsl_to_hex,
};

use crate::config::DEFAULT_SEED;
use crate::error::Result;
use crate::prefs::{PreferenceStore, THEME_COLOR_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A CSS rule of custom properties.
    #[default]
    Css,
    /// A JSON object keyed by token name.
    Json,
    /// `--name value` lines.
    Plain,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,

    /// Selector for CSS output.
    #[arg(long, default_value = ":root")]
    pub selector: String,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            format: OutputFormat::Css,
            selector: ":root".to_string(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct DeriveArgs {
    /// Seed color as `#rrggbb` or `rrggbb`.
    pub seed: String,

    /// Substitute the fallback color instead of failing on malformed input.
    #[arg(long)]
    pub fallback: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ToHexArgs {
    /// Color as `"H S% L%"`.
    pub hsl: String,
}

#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Seed color to persist.
    pub seed: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CurrentArgs {
    /// Print the applied primary color read back as hex.
    #[arg(long)]
    pub hex: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

pub fn render_tokens(tokens: &ThemeTokens, render: &RenderArgs) -> Result<String> {
    let output = match render.format {
        OutputFormat::Css => CssVariables::from_tokens(tokens).to_css_rule(&render.selector),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)? + "\n",
        OutputFormat::Plain => tokens
            .css_properties()
            .iter()
            .map(|(name, value)| format!("{name} {value}\n"))
            .collect(),
    };
    Ok(output)
}

pub fn run_derive(args: DeriveArgs) -> Result<String> {
    let tokens = if args.fallback {
        derive_tokens_or_fallback(&args.seed)
    } else {
        derive_tokens(&args.seed)?
    };
    render_tokens(&tokens, &args.render)
}

pub fn run_to_hex(args: ToHexArgs) -> Result<String> {
    Ok(hsl_to_hex(&args.hsl)? + "\n")
}

/// Validate and persist the seed, then print its tokens.
pub fn run_apply(args: ApplyArgs, prefs_path: &Path) -> Result<String> {
    let seed = Rgb::from_hex(&args.seed)?.to_hex();
    let tokens = derive_tokens(&seed)?;

    let mut store = PreferenceStore::load(prefs_path)?;
    store.set_theme_color(seed.as_str());
    store.save()?;
    tracing::info!(seed = %seed, "applied theme color");

    render_tokens(&tokens, &args.render)
}

/// Re-derive from the persisted seed. A corrupt stored value falls back
/// rather than failing.
pub fn run_current(args: CurrentArgs, prefs_path: &Path) -> Result<String> {
    let store = PreferenceStore::load(prefs_path)?;
    let seed = match store.theme_color() {
        Some(seed) => seed,
        // Present but not a string: corrupt, so render the fallback theme.
        None if store.contains(THEME_COLOR_KEY) => "",
        None => DEFAULT_SEED,
    };
    let tokens = derive_tokens_or_fallback(seed);

    if args.hex {
        let vars = CssVariables::from_tokens(&tokens);
        let hex = rukn_style::read_primary_hex(&vars)?.unwrap_or_else(|| seed.to_string());
        return Ok(hex + "\n");
    }
    render_tokens(&tokens, &args.render)
}

pub fn run_reset(prefs_path: &Path) -> Result<String> {
    let mut store = PreferenceStore::load(prefs_path)?;
    let removed = store.remove(THEME_COLOR_KEY).is_some();
    if removed {
        store.save()?;
        tracing::info!("cleared theme color");
    }
    Ok(format!("theme color reset to {DEFAULT_SEED}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::tempdir;

    fn derive(seed: &str, format: OutputFormat) -> Result<String> {
        run_derive(DeriveArgs {
            seed: seed.to_string(),
            fallback: false,
            render: RenderArgs {
                format,
                ..RenderArgs::default()
            },
        })
    }

    #[test]
    fn derive_css_output() {
        let css = derive("#ff4154", OutputFormat::Css).expect("derive");
        assert_eq!(
            css,
            ":root {\n  --primary: 354 100% 63%;\n  --primary-foreground: 0 0% 12%;\n  \
             --accent: 14 90% 78%;\n  --accent-foreground: 0 0% 12%;\n  --ring: 354 100% 81%;\n}\n"
        );
    }

    #[test]
    fn derive_json_output() {
        let json = derive("#123456", OutputFormat::Json).expect("derive");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["primary"], "210 65% 20%");
        assert_eq!(value["ring"], "210 65% 38%");
        assert_eq!(value["accentForeground"], "0 0% 98%");
    }

    #[test]
    fn derive_plain_output() {
        let plain = derive("#808080", OutputFormat::Plain).expect("derive");
        assert!(plain.starts_with("--primary 0 0% 50%\n"));
        assert_eq!(plain.lines().count(), 5);
    }

    #[test]
    fn derive_rejects_malformed_seed_by_default() {
        let error = derive("zz", OutputFormat::Css).expect_err("malformed");
        assert!(matches!(error, CliError::Color(_)));
    }

    #[test]
    fn derive_fallback_substitutes() {
        let css = run_derive(DeriveArgs {
            seed: "zz".into(),
            fallback: true,
            render: RenderArgs::default(),
        })
        .expect("fallback");
        assert!(css.contains("--primary: 0 100% 50%;"));
    }

    #[test]
    fn current_survives_non_string_stored_seed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{ "theme-color": 16711680 }"#).expect("write");

        let css = run_current(CurrentArgs::default(), &path).expect("current");
        assert!(css.contains("--primary: 0 100% 50%;"));
        assert!(css.contains("--ring: 0 100% 68%;"));
    }

    #[test]
    fn to_hex_converts_and_validates() {
        let hex = run_to_hex(ToHexArgs {
            hsl: "352 95% 59%".into(),
        })
        .expect("convert");
        assert_eq!(hex, "#fa334e\n");

        let error = run_to_hex(ToHexArgs {
            hsl: "720 50% 50%".into(),
        })
        .expect_err("out of range");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn apply_persists_normalized_seed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        run_apply(
            ApplyArgs {
                seed: "FF4154".into(),
                render: RenderArgs::default(),
            },
            &path,
        )
        .expect("apply");

        let store = PreferenceStore::load(&path).expect("load");
        assert_eq!(store.theme_color(), Some("#ff4154"));
    }

    #[test]
    fn apply_rejects_malformed_seed_without_writing() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        let error = run_apply(
            ApplyArgs {
                seed: "#12345".into(),
                render: RenderArgs::default(),
            },
            &path,
        )
        .expect_err("malformed");
        assert!(matches!(error, CliError::Color(_)));
        assert!(!path.exists());
    }

    #[test]
    fn current_uses_default_then_persisted_seed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");

        let before = run_current(CurrentArgs::default(), &path).expect("current");
        assert!(before.contains("--primary: 217 91% 60%;"));

        let mut store = PreferenceStore::load(&path).expect("load");
        store.set_theme_color("#123456");
        store.save().expect("save");

        let after = run_current(CurrentArgs::default(), &path).expect("current");
        assert!(after.contains("--primary: 210 65% 20%;"));
    }

    #[test]
    fn current_hex_reads_back_through_the_sheet() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        let mut store = PreferenceStore::load(&path).expect("load");
        store.set_theme_color("#808080");
        store.save().expect("save");

        let args = CurrentArgs {
            hex: true,
            ..CurrentArgs::default()
        };
        assert_eq!(run_current(args, &path).expect("current"), "#808080\n");
    }

    #[test]
    fn current_survives_corrupt_stored_seed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        let mut store = PreferenceStore::load(&path).expect("load");
        store.set_theme_color("not-a-color");
        store.save().expect("save");

        let css = run_current(CurrentArgs::default(), &path).expect("current");
        assert!(css.contains("--primary: 0 100% 50%;"));
    }

    #[test]
    fn reset_clears_seed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        let mut store = PreferenceStore::load(&path).expect("load");
        store.set_theme_color("#123456");
        store.set_flag("sidebar-open", true);
        store.save().expect("save");

        run_reset(&path).expect("reset");
        let store = PreferenceStore::load(&path).expect("reload");
        assert_eq!(store.theme_color(), None);
        assert!(store.flag("sidebar-open"));
    }
}
