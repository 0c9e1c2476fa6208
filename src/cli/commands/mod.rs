//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod config;
pub mod recommend;
pub mod search;
pub mod usage;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a launch shortlist from the usage ranking
    Recommend(recommend::RecommendArgs),

    /// Search installed apps by name or id
    Search(search::SearchArgs),

    /// Show the aggregated usage ranking
    Usage(usage::UsageArgs),

    /// Show effective configuration
    Config(config::ConfigArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Recommend(args) => recommend::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Usage(args) => usage::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
