//! Headless simulation CLI for the skirmish rules.
//!
//! Run with: `cargo run -p skirmish-sim -- <command>`

mod arena;
mod bars;
mod commands;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Duel, Sheet};
use skirmish_content::ContentFactory;
use skirmish_core::as_game_error;

/// Simulate skirmish encounters from content files
#[derive(Parser)]
#[command(name = "skirmish-sim")]
#[command(about = "Headless skirmish simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (config.toml, spells.ron, items.ron, characters.ron)
    #[arg(long, global = true, env = "SKIRMISH_DATA_DIR", value_name = "DIR")]
    data: Option<PathBuf>,

    /// Also write logs to a file; without a value uses the platform cache directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate a duel between two characters
    Duel(Duel),

    /// Print a character sheet
    Sheet(Sheet),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SKIRMISH_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_dir = cli.log_dir.map(|dir| dir.unwrap_or_else(dirs::log_dir));
    let _guard = logging::setup_logging(log_dir.as_deref())?;

    let data_dir = cli.data.unwrap_or_else(dirs::default_data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "content directory");
    let factory = ContentFactory::new(data_dir);

    let result = match cli.command {
        Command::Duel(cmd) => cmd.execute(&factory),
        Command::Sheet(cmd) => cmd.execute(&factory),
    };
    result.inspect_err(log_failure)
}

/// Logs a failed command, tagged with the rules error code when one is in the chain.
fn log_failure(err: &anyhow::Error) {
    match err.chain().find_map(as_game_error) {
        Some(cause) if cause.severity().is_internal() => tracing::error!(
            code = cause.error_code(),
            severity = cause.severity().as_str(),
            "{err:#}"
        ),
        Some(cause) => tracing::warn!(
            code = cause.error_code(),
            severity = cause.severity().as_str(),
            "{err:#}"
        ),
        None => tracing::error!("{err:#}"),
    }
}
