//! Rewind - terminal tic-tac-toe with move history navigation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    init_tracing(&settings)?;
    info!(config = ?cli.config, "Settings ready");

    tui::run_tui(settings)
}

/// Sends tracing output to the configured log file so it stays off the
/// terminal the UI draws on.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
