use clap::{Parser, Subcommand};

use crate::config::GlobalArgs;
use crate::error::Result;
use crate::logging;
use crate::prefs::{FlagArgs, run_flag};
use crate::theme::{
    ApplyArgs, CurrentArgs, DeriveArgs, ToHexArgs, run_apply, run_current, run_derive, run_reset,
    run_to_hex,
};
use crate::translate::{TranslateArgs, run_translate};

#[derive(Debug, Parser)]
#[command(
    name = "rukn",
    about = "Theme-color derivation and translation tools for the Rukn design system",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive theme tokens from a seed color.
    Derive(DeriveArgs),

    /// Convert an "H S% L%" color to #rrggbb.
    #[command(name = "to-hex")]
    ToHex(ToHexArgs),

    /// Persist a seed color and print its tokens.
    Apply(ApplyArgs),

    /// Print tokens for the persisted seed color.
    Current(CurrentArgs),

    /// Forget the persisted seed color.
    Reset,

    /// Look up a translation with language fallback.
    Translate(TranslateArgs),

    /// Read or set a boolean preference.
    Flag(FlagArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.log_format);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let output = execute(cli)?;
    print!("{output}");
    Ok(())
}

/// Run a command and return what it would print.
pub fn execute(cli: Cli) -> Result<String> {
    let prefs = cli.global.prefs.as_path();
    match cli.command {
        Commands::Derive(args) => run_derive(args),
        Commands::ToHex(args) => run_to_hex(args),
        Commands::Apply(args) => run_apply(args, prefs),
        Commands::Current(args) => run_current(args, prefs),
        Commands::Reset => run_reset(prefs),
        Commands::Translate(args) => run_translate(args),
        Commands::Flag(args) => run_flag(args, prefs),
    }
}
