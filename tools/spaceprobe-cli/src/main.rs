//! Spaceprobe CLI — query the fullscreen state of the active space.
//!
//! Usage:
//!   spaceprobe query [--json] [--strict] [--exit-code]
//!   spaceprobe watch [--interval-ms N] [--overlay-distance D] [--json]
//!   spaceprobe check
//!   spaceprobe config [--init]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spaceprobe_common::config::AppConfig;

mod commands;
mod provider;

#[derive(Parser)]
#[command(
    name = "spaceprobe",
    about = "Report whether the active virtual desktop is a fullscreen space",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print whether the active space is fullscreen
    Query {
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Fail instead of applying the fallback when the state can't be read
        #[arg(long)]
        strict: bool,

        /// Exit 0 when fullscreen, 1 when not, 2 when the read fails under --strict
        #[arg(long)]
        exit_code: bool,
    },

    /// Print a line every time the fullscreen state changes
    Watch {
        /// Milliseconds between reads (defaults to the config value)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Also print the overlay decision for a pointer this far from the top edge
        #[arg(long)]
        overlay_distance: Option<f64>,

        /// Print transitions as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Check system capabilities
    Check,

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load(),
    };

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    spaceprobe_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Query {
            json,
            strict,
            exit_code,
        } => commands::query::run(&config, json, strict, exit_code),
        Commands::Watch {
            interval_ms,
            overlay_distance,
            json,
        } => commands::watch::run(&config, interval_ms, overlay_distance, json).await,
        Commands::Check => commands::check::run(&config),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
