//! Foreground-usage feed and aggregation.
//!
//! `log` owns the raw, timestamped usage records and the historical-window
//! restriction; `aggregate` collapses window-restricted samples into one
//! ranked total per application.

pub mod aggregate;
pub mod log;

pub use aggregate::{UsageRank, UsageSample, aggregate};
pub use log::{Lookback, UsageLog, UsageRecord};
