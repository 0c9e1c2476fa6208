use std::path::PathBuf;

use crate::catalog::AppCatalog;
use crate::config::Config;
use crate::error::{LaunchrecError, Result};
use crate::usage::UsageLog;

pub struct AppContext {
    pub config_path: Option<PathBuf>,
    pub config: Config,
    pub apps_path: PathBuf,
    pub usage_path: PathBuf,
    pub catalog: AppCatalog,
    pub usage_log: UsageLog,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        // Resolution order per feed: CLI flag, then config (which already
        // absorbed the environment), then the user data dir.
        let apps_path = cli
            .apps
            .clone()
            .or_else(|| config.feeds.apps_path.clone())
            .map_or_else(|| default_feed_path("apps.json"), Ok)?;
        let usage_path = cli
            .usage
            .clone()
            .or_else(|| config.feeds.usage_path.clone())
            .map_or_else(|| default_feed_path("usage.json"), Ok)?;

        Ok(Self {
            config_path: cli.config.clone(),
            config,
            catalog: AppCatalog::load(&apps_path)?,
            usage_log: UsageLog::load(&usage_path)?,
            apps_path,
            usage_path,
            robot_mode: cli.robot,
            verbosity: cli.verbose,
        })
    }
}

fn default_feed_path(file_name: &str) -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| LaunchrecError::Config("data directory not found".to_string()))?;
    Ok(data_dir.join("launchrec").join(file_name))
}
