use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use clap::Args;
use rukn_i18n::{LocaleStrings, StringCatalog};

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct TranslateArgs {
    /// Translation key, e.g. `footer.license`.
    pub key: String,

    /// JSON file of `{ "<lang>": { "<key>": "<text>" } }`.
    #[arg(long)]
    pub catalog: PathBuf,

    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Language used when `--lang` lacks the key.
    #[arg(long, default_value = "en")]
    pub fallback: String,

    /// Value for `{year}`; defaults to the current year.
    #[arg(long)]
    pub year: Option<i32>,
}

pub fn load_catalog(path: &Path, fallback: &str) -> Result<StringCatalog> {
    if !path.exists() {
        return Err(CliError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    let tables: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(&raw)?;

    let mut catalog = StringCatalog::new(fallback);
    for (tag, strings) in tables {
        catalog.insert_locale(&tag, strings.into_iter().collect::<LocaleStrings>())?;
    }
    tracing::debug!(path = %path.display(), locales = ?catalog.locales(), "loaded catalog");
    Ok(catalog)
}

pub fn run_translate(args: TranslateArgs) -> Result<String> {
    let catalog = load_catalog(&args.catalog, &args.fallback)?;
    let year = args
        .year
        .unwrap_or_else(|| chrono::Local::now().year())
        .to_string();

    catalog
        .format(&args.lang, &args.key, &[("year", year.as_str())])
        .map(|text| text + "\n")
        .ok_or(CliError::MissingTranslation {
            key: args.key,
            lang: args.lang,
        })
}
