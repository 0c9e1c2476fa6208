//! launchrec usage - show the aggregated usage ranking

use chrono::Utc;
use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::recommend::ranked_usage;
use crate::usage::Lookback;
use crate::utils::format::{format_duration_ms, truncate_label};

#[derive(Args, Debug)]
pub struct UsageArgs {
    /// How many days back to look (default from config, 30)
    #[arg(long, value_name = "DAYS")]
    pub days: Option<u32>,

    /// Show at most this many rows
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &UsageArgs) -> Result<()> {
    let days = args.days.unwrap_or(ctx.config.usage.lookback_days);
    let lookback = Lookback::from_days(days)?;

    let mut ranked = ranked_usage(&ctx.catalog, &ctx.usage_log, lookback, Utc::now());
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    if ctx.robot_mode {
        let ranks: Vec<_> = ranked
            .iter()
            .map(|rank| {
                serde_json::json!({
                    "app_id": rank.app_id,
                    "total_foreground_ms": rank.total_foreground_ms,
                    "label": ctx.catalog.get(&rank.app_id).map(|entry| entry.label.clone()),
                })
            })
            .collect();

        let payload = serde_json::json!({
            "status": "ok",
            "lookback_days": days,
            "ranks": ranks,
        });
        emit_json(&payload)
    } else {
        let mut layout = HumanLayout::new();
        layout
            .title("Usage Ranking")
            .kv("Window", &format!("{days} days"))
            .kv("Apps", &ranked.len().to_string())
            .blank();
        for (idx, rank) in ranked.iter().enumerate() {
            let label = ctx
                .catalog
                .get(&rank.app_id)
                .map_or_else(|| rank.app_id.to_string(), |entry| entry.label.clone());
            layout.ranked_row(
                idx + 1,
                &truncate_label(&label, 24),
                &format!(
                    "{:>8}  {}",
                    format_duration_ms(rank.total_foreground_ms),
                    rank.app_id
                ),
            );
        }
        emit_human(layout);
        Ok(())
    }
}
