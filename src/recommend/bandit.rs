//! Epsilon-greedy shortlist selection without replacement.
//!
//! Each round draws once from the injected random source: below the exploit
//! threshold it takes the best remaining candidate, otherwise a uniformly
//! random remaining one. Picked candidates are removed, so one call never
//! repeats an id. The selector carries no state between calls and updates no
//! reward estimates; variety across runs comes purely from the random source.

use rand::Rng;

use crate::catalog::AppId;
use crate::error::{LaunchrecError, Result};
use crate::usage::UsageRank;

/// Probability that a round exploits (picks the highest-ranked remaining
/// candidate); the remaining 0.3 explores. Tunable constant, not a runtime
/// knob.
pub const EXPLOIT_PROBABILITY: f64 = 0.7;

/// Pick up to `count` application ids from `ranked`, in pick order.
///
/// Returns all candidates when `count` exceeds the pool. A negative `count`
/// is a caller bug and is reported instead of being clamped to zero.
pub fn select<R: Rng + ?Sized>(
    ranked: &[UsageRank],
    count: i64,
    rng: &mut R,
) -> Result<Vec<AppId>> {
    if count < 0 {
        return Err(LaunchrecError::InvalidCount(count));
    }
    let take = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(ranked.len());

    let mut remaining: Vec<&UsageRank> = ranked.iter().collect();
    let mut picked = Vec::with_capacity(take);
    for _ in 0..take {
        let idx = if rng.random::<f64>() < EXPLOIT_PROBABILITY {
            best_remaining(&remaining)
        } else {
            rng.random_range(0..remaining.len())
        };
        picked.push(remaining.remove(idx).app_id.clone());
    }
    Ok(picked)
}

/// Index of the remaining candidate with the highest total; the earliest
/// candidate wins ties.
fn best_remaining(remaining: &[&UsageRank]) -> usize {
    let mut best = 0;
    for (idx, rank) in remaining.iter().enumerate().skip(1) {
        if rank.total_foreground_ms > remaining[best].total_foreground_ms {
            best = idx;
        }
    }
    best
}
