//! launchrec - rank installed apps by foreground usage and pick a launch
//! shortlist.
//!
//! The engine is two pure pieces composed as a short pipeline: the usage
//! aggregator ([`usage::aggregate`]) collapses raw, possibly fragmented
//! foreground-time records into one ranked total per application, and the
//! selector ([`recommend::select`]) turns that ranking into a bounded,
//! non-repeating shortlist by epsilon-greedy sampling without replacement.
//! Everything around them (the installed-app catalog, the usage-record feed,
//! the CLI) exists to feed the pipeline and present its output.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod recommend;
pub mod search;
pub mod test_utils;
pub mod usage;
pub mod utils;

pub use error::{LaunchrecError, Result};
