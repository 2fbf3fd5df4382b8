use std::path::PathBuf;

use clap::Args;

use crate::logging::LogFormat;

pub const PREFS_ENV: &str = "RUKN_PREFS";
pub const DEFAULT_PREFS_PATH: &str = ".rukn/preferences.json";

/// Seed used by `current` before any color has been applied.
pub const DEFAULT_SEED: &str = "#3b82f6";

/// Options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Preferences file holding the persisted seed color and flags.
    #[arg(long, global = true, env = PREFS_ENV, default_value = DEFAULT_PREFS_PATH)]
    pub prefs: PathBuf,

    /// Log output format (filter with RUKN_LOG).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
