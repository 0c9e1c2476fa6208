use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LaunchrecError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub usage: UsageConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

impl Config {
    /// Load configuration: built-in defaults, then an optional TOML file
    /// (explicit path, `LAUNCHREC_CONFIG`, or the user config dir), then
    /// environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LAUNCHREC_CONFIG").ok().map(PathBuf::from))
            .or_else(default_config_path);

        if let Some(path) = path {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            LaunchrecError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            LaunchrecError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.feeds {
            self.feeds.merge(patch);
        }
        if let Some(patch) = patch.usage {
            self.usage.merge(patch);
        }
        if let Some(patch) = patch.recommend {
            self.recommend.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_path("LAUNCHREC_APPS_PATH") {
            self.feeds.apps_path = Some(value);
        }
        if let Some(value) = env_path("LAUNCHREC_USAGE_PATH") {
            self.feeds.usage_path = Some(value);
        }
        if let Some(value) = env_u32("LAUNCHREC_LOOKBACK_DAYS")? {
            self.usage.lookback_days = value;
        }
        if let Some(value) = env_u32("LAUNCHREC_SHORTLIST_SIZE")? {
            self.recommend.shortlist_size = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedsConfig {
    #[serde(default)]
    pub apps_path: Option<PathBuf>,
    #[serde(default)]
    pub usage_path: Option<PathBuf>,
}

impl FeedsConfig {
    fn merge(&mut self, patch: FeedsPatch) {
        if let Some(value) = patch.apps_path {
            self.apps_path = Some(value);
        }
        if let Some(value) = patch.usage_path {
            self.usage_path = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Default window for the usage ranking, in days. Must be non-zero.
    #[serde(default)]
    pub lookback_days: u32,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            lookback_days: crate::usage::log::DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl UsageConfig {
    fn merge(&mut self, patch: UsagePatch) {
        if let Some(value) = patch.lookback_days {
            self.lookback_days = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// How many apps a shortlist holds, matching the widget's slot count.
    #[serde(default)]
    pub shortlist_size: u32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self { shortlist_size: 15 }
    }
}

impl RecommendConfig {
    fn merge(&mut self, patch: RecommendPatch) {
        if let Some(value) = patch.shortlist_size {
            self.shortlist_size = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub feeds: Option<FeedsPatch>,
    pub usage: Option<UsagePatch>,
    pub recommend: Option<RecommendPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FeedsPatch {
    pub apps_path: Option<PathBuf>,
    pub usage_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UsagePatch {
    pub lookback_days: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RecommendPatch {
    pub shortlist_size: Option<u32>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("launchrec/config.toml"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().map(PathBuf::from)
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|err| LaunchrecError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
