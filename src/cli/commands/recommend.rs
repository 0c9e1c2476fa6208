//! launchrec recommend - pick a launch shortlist

use chrono::Utc;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::recommend;
use crate::usage::Lookback;
use crate::utils::format::truncate_label;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Number of apps to pick
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Restrict history to the last N days (full history when omitted)
    #[arg(long, value_name = "DAYS")]
    pub days: Option<u32>,

    /// Seed the random source for a reproducible shortlist
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs) -> Result<()> {
    // A recommend request with no window digs through the whole history to
    // keep the exploration pool as wide as possible.
    let lookback = match args.days {
        Some(days) => Lookback::from_days(days)?,
        None => Lookback::Unbounded,
    };
    let count = args
        .count
        .unwrap_or_else(|| i64::from(ctx.config.recommend.shortlist_size));

    let now = Utc::now();
    let entries = match args.seed {
        Some(seed) => recommend::shortlist(
            &ctx.catalog,
            &ctx.usage_log,
            lookback,
            count,
            now,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => recommend::shortlist(
            &ctx.catalog,
            &ctx.usage_log,
            lookback,
            count,
            now,
            &mut rand::rng(),
        )?,
    };

    if ctx.robot_mode {
        let payload = serde_json::json!({
            "status": "ok",
            "count": entries.len(),
            "apps": entries,
        });
        emit_json(&payload)
    } else {
        let mut layout = HumanLayout::new();
        layout.title("Recommended Apps");
        if entries.is_empty() {
            layout.note("no usage recorded");
        }
        for (idx, entry) in entries.iter().enumerate() {
            layout.ranked_row(
                idx + 1,
                &truncate_label(&entry.label, 24),
                entry.id.as_str(),
            );
        }
        emit_human(layout);
        Ok(())
    }
}
