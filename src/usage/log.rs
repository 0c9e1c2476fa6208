//! Raw usage-record feed and historical-window restriction.

use std::num::NonZeroU32;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::AppId;
use crate::error::{LaunchrecError, Result};
use crate::usage::aggregate::UsageSample;

/// Default window for usage-ranking queries, in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// One timestamped usage record from the platform's usage-statistics source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub app_id: AppId,
    pub foreground_ms: u64,
    pub recorded_at: DateTime<Utc>,
}

/// How far back the usage query reaches.
///
/// A zero-day window is unrepresentable; recommendation requests with no
/// search term use `Unbounded` to maximize the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    Days(NonZeroU32),
    Unbounded,
}

impl Lookback {
    /// Build a bounded lookback, rejecting a zero magnitude.
    pub fn from_days(days: u32) -> Result<Self> {
        NonZeroU32::new(days).map(Self::Days).ok_or_else(|| {
            LaunchrecError::Config("lookback must be a non-zero number of days".to_string())
        })
    }

    /// Oldest timestamp still inside the window, or `None` when unbounded.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Days(days) => Some(now - Duration::days(i64::from(days.get()))),
            Self::Unbounded => None,
        }
    }
}

/// The full usage-record feed, as read from disk.
#[derive(Debug, Clone, Default)]
pub struct UsageLog {
    records: Vec<UsageRecord>,
}

impl UsageLog {
    #[must_use]
    pub fn from_records(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }

    /// Load the feed from a JSON array of [`UsageRecord`] objects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LaunchrecError::FeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<UsageRecord> =
            serde_json::from_str(&raw).map_err(|source| LaunchrecError::FeedParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(count = records.len(), path = %path.display(), "loaded usage log");
        Ok(Self::from_records(records))
    }

    #[must_use]
    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Restrict records to the lookback window and strip timestamps.
    ///
    /// The result is the aggregator's input; window restriction happens here
    /// so the aggregation itself stays pure.
    #[must_use]
    pub fn samples_within(&self, lookback: Lookback, now: DateTime<Utc>) -> Vec<UsageSample> {
        let cutoff = lookback.cutoff(now);
        self.records
            .iter()
            .filter(|record| cutoff.is_none_or(|cutoff| record.recorded_at >= cutoff))
            .map(|record| UsageSample {
                app_id: record.app_id.clone(),
                foreground_ms: record.foreground_ms,
            })
            .collect()
    }
}
