//! launchrec search - filter installed apps by name or id

use chrono::Utc;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::recommend;
use crate::search::{ScreenState, SearchSession};
use crate::usage::Lookback;
use crate::utils::format::truncate_label;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search word; empty shows the recommendation shortlist instead
    pub query: Option<String>,

    /// Seed the random source for a reproducible shortlist
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let count = i64::from(ctx.config.recommend.shortlist_size);
    let now = Utc::now();
    let recommended = match args.seed {
        Some(seed) => recommend::shortlist(
            &ctx.catalog,
            &ctx.usage_log,
            Lookback::Unbounded,
            count,
            now,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => recommend::shortlist(
            &ctx.catalog,
            &ctx.usage_log,
            Lookback::Unbounded,
            count,
            now,
            &mut rand::rng(),
        )?,
    };

    let session = SearchSession::new(ctx.catalog.entries().to_vec(), recommended);
    let state = session.query(args.query.as_deref().unwrap_or(""));

    if ctx.robot_mode {
        emit_json(&state)
    } else {
        let mut layout = HumanLayout::new();
        let apps = match &state {
            ScreenState::Recommend(apps) => {
                layout.title("Recommended Apps");
                apps
            }
            ScreenState::SearchResult(apps) => {
                layout.title("Search Results");
                apps
            }
        };
        if apps.is_empty() {
            layout.note("no matches");
        }
        for entry in apps {
            layout.bullet(&format!(
                "{:<26} {}",
                truncate_label(&entry.label, 24),
                entry.id
            ));
        }
        emit_human(layout);
        Ok(())
    }
}
