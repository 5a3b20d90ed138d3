//! Command-line client for the boss raid.
//!
//! Every invocation opens the save directory, submits one request (or runs
//! one query) on behalf of the caller identity, prints the result and exits.
mod commands;
mod config;
mod output;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::Command;
use config::{CliConfig, OutputFormat};

/// Boss raid client
#[derive(Parser)]
#[command(name = "raid")]
#[command(about = "Fight bosses, heal friends and claim rewards", long_about = None)]
#[command(version)]
struct Cli {
    /// Identity to act as (overrides RAID_CALLER)
    #[arg(short, long, global = true, value_name = "IDENTITY")]
    caller: Option<String>,

    /// Save directory (overrides RAID_SAVE_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Output format (overrides RAID_OUTPUT)
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(caller) = cli.caller {
        config.caller = config::parse_caller(caller);
    }
    if let Some(dir) = cli.save_dir {
        config.save_dir = dir;
    }
    if let Some(format) = cli.output {
        config.output = format;
    }

    tracing::debug!("Using save directory {}", config.save_dir.display());
    cli.command.execute(&config).await
}

/// Logs go to stderr so stdout stays parseable. Defaults to `warn`.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
