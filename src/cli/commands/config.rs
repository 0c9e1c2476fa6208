//! launchrec config - show effective configuration
//!
//! Runs before the feeds are loaded, so it works on a machine with no feed
//! files yet.

use clap::Args;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::config::Config;
use crate::error::Result;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Show built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let config = if args.defaults {
        Config::default()
    } else {
        ctx.config.clone()
    };
    render(ctx.robot_mode, &config)
}

/// Entry point used by main before an [`AppContext`] exists.
pub fn run_without_context(cli: &Cli, args: &ConfigArgs) -> Result<()> {
    let config = if args.defaults {
        Config::default()
    } else {
        Config::load(cli.config.as_deref())?
    };
    render(cli.robot, &config)
}

fn render(robot: bool, config: &Config) -> Result<()> {
    if robot {
        let payload = serde_json::json!({
            "status": "ok",
            "config": config,
        });
        emit_json(&payload)
    } else {
        let path = |value: Option<&std::path::PathBuf>| {
            value.map_or_else(|| "(default)".to_string(), |p| p.display().to_string())
        };
        let mut layout = HumanLayout::new();
        layout
            .title("Configuration")
            .section("Feeds")
            .kv("Apps feed", &path(config.feeds.apps_path.as_ref()))
            .kv("Usage feed", &path(config.feeds.usage_path.as_ref()))
            .blank()
            .section("Usage")
            .kv("Lookback days", &config.usage.lookback_days.to_string())
            .blank()
            .section("Recommend")
            .kv(
                "Shortlist size",
                &config.recommend.shortlist_size.to_string(),
            );
        emit_human(layout);
        Ok(())
    }
}
