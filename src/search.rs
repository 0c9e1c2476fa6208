//! Installed-app text search and the screen state it feeds.

use serde::Serialize;

use crate::catalog::AppEntry;

/// Search results are capped at this many entries.
pub const MAX_RESULTS: usize = 10;

/// Filter installed apps by a search word.
///
/// A match is a case-insensitive substring of the application id or a
/// case-sensitive substring of the display label. Input order is preserved
/// and the result is truncated to [`MAX_RESULTS`].
#[must_use]
pub fn filter_by_query<'a>(installed: &'a [AppEntry], query: &str) -> Vec<&'a AppEntry> {
    let query_lower = query.to_lowercase();
    installed
        .iter()
        .filter(|entry| {
            entry.id.as_str().to_lowercase().contains(&query_lower)
                || entry.label.contains(query)
        })
        .take(MAX_RESULTS)
        .collect()
}

/// What the search screen shows: the recommendation shortlist, or the result
/// of a text query. Each case carries its own ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "apps", rename_all = "snake_case")]
pub enum ScreenState {
    Recommend(Vec<AppEntry>),
    SearchResult(Vec<AppEntry>),
}

/// Immutable snapshot of the installed catalog plus a precomputed shortlist.
///
/// The shortlist is sampled once up front; repeated empty queries within one
/// session show the same recommendations.
#[derive(Debug, Clone)]
pub struct SearchSession {
    installed: Vec<AppEntry>,
    recommended: Vec<AppEntry>,
}

impl SearchSession {
    #[must_use]
    pub fn new(installed: Vec<AppEntry>, recommended: Vec<AppEntry>) -> Self {
        Self {
            installed,
            recommended,
        }
    }

    /// Empty queries surface the shortlist; anything else runs the filter.
    #[must_use]
    pub fn query(&self, word: &str) -> ScreenState {
        if word.is_empty() {
            ScreenState::Recommend(self.recommended.clone())
        } else {
            ScreenState::SearchResult(
                filter_by_query(&self.installed, word)
                    .into_iter()
                    .cloned()
                    .collect(),
            )
        }
    }
}
