use std::path::PathBuf;

use rukn_i18n::I18nError;
use rukn_style::ColorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("no translation for {key:?} in {lang:?} or its fallbacks")]
    MissingTranslation { key: String, lang: String },

    #[error("malformed preferences file {path}: {message}")]
    MalformedPreferences { path: PathBuf, message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Color(_) | Self::InvalidArgument { .. } => 2,
            Self::MissingTranslation { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
