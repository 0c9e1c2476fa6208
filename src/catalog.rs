//! Installed-application catalog.
//!
//! The catalog is one of the two inbound data feeds: the finite set of
//! launchable applications the surrounding platform knows about. Entries
//! carry the display label and launch handle that the recommendation core
//! itself never inspects; the core works purely in terms of [`AppId`].

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LaunchrecError, Result};

/// Opaque, stable application identifier.
///
/// No structure is assumed beyond equality; reverse-domain package names,
/// desktop-file ids, and bare binary names are all equally valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One launchable application: identifier, display label, launch handle.
///
/// `exec` is required at parse time. Entries without a launch handle never
/// reach the ranking or selection code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: AppId,
    pub label: String,
    pub exec: String,
}

/// The set of installed, launchable applications.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    entries: Vec<AppEntry>,
    by_id: HashMap<AppId, usize>,
}

impl AppCatalog {
    /// Build a catalog from entries, preserving order.
    ///
    /// Duplicate ids keep the first occurrence.
    #[must_use]
    pub fn from_entries(entries: Vec<AppEntry>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if by_id.contains_key(&entry.id) {
                warn!(id = %entry.id, "duplicate catalog entry ignored");
                continue;
            }
            by_id.insert(entry.id.clone(), kept.len());
            kept.push(entry);
        }
        Self {
            entries: kept,
            by_id,
        }
    }

    /// Load the catalog from a JSON feed: an array of [`AppEntry`] objects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LaunchrecError::FeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<AppEntry> =
            serde_json::from_str(&raw).map_err(|source| LaunchrecError::FeedParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(count = entries.len(), path = %path.display(), "loaded app catalog");
        Ok(Self::from_entries(entries))
    }

    #[must_use]
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &AppId) -> bool {
        self.by_id.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &AppId) -> Option<&AppEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// Resolve shortlist ids to full entries, preserving shortlist order.
    ///
    /// Ids that have disappeared from the catalog since the usage feed was
    /// produced are skipped with a warning rather than failing the whole
    /// shortlist.
    #[must_use]
    pub fn resolve(&self, ids: &[AppId]) -> Vec<AppEntry> {
        ids.iter()
            .filter_map(|id| {
                let entry = self.get(id);
                if entry.is_none() {
                    warn!(id = %id, "shortlisted app missing from catalog");
                }
                entry.cloned()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, label: &str) -> AppEntry {
        AppEntry {
            id: AppId::from(id),
            label: label.to_string(),
            exec: format!("/usr/bin/{id}"),
        }
    }

    #[test]
    fn resolve_preserves_shortlist_order() {
        let catalog = AppCatalog::from_entries(vec![
            entry("a", "Alpha"),
            entry("b", "Beta"),
            entry("c", "Gamma"),
        ]);
        let ids = vec![AppId::from("c"), AppId::from("a")];
        let resolved = catalog.resolve(&ids);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].label, "Gamma");
        assert_eq!(resolved[1].label, "Alpha");
    }

    #[test]
    fn resolve_skips_missing_ids() {
        let catalog = AppCatalog::from_entries(vec![entry("a", "Alpha")]);
        let ids = vec![AppId::from("gone"), AppId::from("a")];
        let resolved = catalog.resolve(&ids);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, AppId::from("a"));
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let catalog = AppCatalog::from_entries(vec![entry("a", "First"), entry("a", "Second")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&AppId::from("a")).unwrap().label, "First");
    }

    #[test]
    fn entry_without_exec_fails_to_parse() {
        let raw = r#"[{"id": "a", "label": "Alpha"}]"#;
        let parsed: std::result::Result<Vec<AppEntry>, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }
}
