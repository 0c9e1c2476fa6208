//! Command-line surface: global flags and subcommand dispatch.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "launchrec",
    version,
    about = "Rank installed apps by foreground usage and pick a launch shortlist",
    propagate_version = true
)]
pub struct Cli {
    /// Machine-readable JSON output on stdout
    #[arg(long, global = true)]
    pub robot: bool,

    /// Suppress log output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Installed-app catalog feed (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub apps: Option<PathBuf>,

    /// Usage-record feed (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub usage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
