//! Persisted user preferences.
//!
//! A flat JSON object of string and boolean values, the file-backed
//! counterpart of browser local storage. Only the theme seed color is stored;
//! derived tokens are always recomputed.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Key holding the last applied seed color.
pub const THEME_COLOR_KEY: &str = "theme-color";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Flag(bool),
    Text(String),
    /// Anything else found on disk. Kept as-is, read as absent.
    Other(serde_json::Value),
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl PreferenceStore {
    /// Load from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let values = match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|error| {
                CliError::MalformedPreferences {
                    path: path.to_path_buf(),
                    message: error.to_string(),
                }
            })?,
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error.into()),
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "loaded preferences");
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to disk through a sibling temp file so readers never see a
    /// partial write.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&tmp, json + "\n")?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved preferences");
        Ok(())
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(PrefValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), PrefValue::Text(value.into()));
    }

    /// Unset and non-boolean values read as `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(PrefValue::Flag(true)))
    }

    pub fn set_flag(&mut self, key: &str, on: bool) {
        self.values.insert(key.to_string(), PrefValue::Flag(on));
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PrefValue> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn theme_color(&self) -> Option<&str> {
        self.text(THEME_COLOR_KEY)
    }

    pub fn set_theme_color(&mut self, hex: impl Into<String>) {
        self.set_text(THEME_COLOR_KEY, hex);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlagState {
    On,
    Off,
}

#[derive(Debug, Clone, Args)]
pub struct FlagArgs {
    /// Preference name, e.g. `sidebar-open`.
    pub name: String,

    /// New value; omit to print the current one.
    #[arg(value_enum)]
    pub state: Option<FlagState>,
}

pub fn run_flag(args: FlagArgs, prefs_path: &Path) -> Result<String> {
    if args.name.trim().is_empty() {
        return Err(CliError::invalid("flag name cannot be empty"));
    }
    if args.name == THEME_COLOR_KEY {
        return Err(CliError::invalid(format!(
            "{THEME_COLOR_KEY} holds a color; use `rukn apply`"
        )));
    }

    let mut store = PreferenceStore::load(prefs_path)?;
    if let Some(state) = args.state {
        store.set_flag(&args.name, state == FlagState::On);
        store.save()?;
    }
    let shown = if store.flag(&args.name) { "on" } else { "off" };
    Ok(format!("{} {shown}\n", args.name))
}
