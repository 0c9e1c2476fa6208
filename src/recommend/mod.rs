//! Shortlist recommendation pipeline.
//!
//! Wires the usage feed, the aggregator, and the bandit selector together:
//! window the history, drop records for apps that are no longer launchable,
//! rank by total foreground time, sample a shortlist, and resolve the picked
//! ids back to catalog entries for display.

pub mod bandit;

pub use bandit::{EXPLOIT_PROBABILITY, select};

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::catalog::{AppCatalog, AppEntry};
use crate::error::Result;
use crate::usage::{Lookback, UsageLog, UsageRank, aggregate};

/// Rank the catalog's launchable apps by summed foreground time within the
/// window.
///
/// Records for ids absent from the catalog are dropped before aggregation;
/// usage history routinely outlives an uninstall.
#[must_use]
pub fn ranked_usage(
    catalog: &AppCatalog,
    usage: &UsageLog,
    lookback: Lookback,
    now: DateTime<Utc>,
) -> Vec<UsageRank> {
    let mut samples = usage.samples_within(lookback, now);
    samples.retain(|sample| catalog.contains(&sample.app_id));
    aggregate(samples)
}

/// Produce a launch shortlist of up to `count` apps.
pub fn shortlist<R: Rng + ?Sized>(
    catalog: &AppCatalog,
    usage: &UsageLog,
    lookback: Lookback,
    count: i64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<AppEntry>> {
    let ranked = ranked_usage(catalog, usage, lookback, now);
    debug!(candidates = ranked.len(), count, "sampling shortlist");
    let picked = select(&ranked, count, rng)?;
    Ok(catalog.resolve(&picked))
}
