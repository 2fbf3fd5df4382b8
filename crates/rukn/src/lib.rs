#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod theme;
pub mod translate;

pub use cli::run_from_env;
pub use error::{CliError, Result};
