//! Collapse raw usage samples into one ranked total per application.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::AppId;

/// One raw usage observation.
///
/// The source system may fragment a window into sub-intervals, so several
/// samples can share an `app_id`; totals for the same id are summed, never
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSample {
    pub app_id: AppId,
    pub foreground_ms: u64,
}

/// Best-known total foreground time for one application.
///
/// At most one rank exists per id, and only for ids with a positive total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRank {
    pub app_id: AppId,
    pub total_foreground_ms: u64,
}

/// Sum samples per application and rank descending by total.
///
/// Apps with a zero total are dropped. Ties keep first-seen order, so the
/// output is fully deterministic for a given input sequence.
#[must_use]
pub fn aggregate(samples: impl IntoIterator<Item = UsageSample>) -> Vec<UsageRank> {
    let mut ranks: Vec<UsageRank> = Vec::new();
    let mut by_id: HashMap<AppId, usize> = HashMap::new();

    for sample in samples {
        match by_id.get(&sample.app_id) {
            Some(&idx) => {
                ranks[idx].total_foreground_ms += sample.foreground_ms;
            }
            None => {
                by_id.insert(sample.app_id.clone(), ranks.len());
                ranks.push(UsageRank {
                    app_id: sample.app_id,
                    total_foreground_ms: sample.foreground_ms,
                });
            }
        }
    }

    ranks.retain(|rank| rank.total_foreground_ms > 0);
    // Stable sort: equal totals keep first-seen order.
    ranks.sort_by(|a, b| b.total_foreground_ms.cmp(&a.total_foreground_ms));
    ranks
}
