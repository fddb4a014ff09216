//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
