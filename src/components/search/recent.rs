// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Recently executed search terms.
//!
//! A small most-recent-first list, capped at five unique terms, persisted as
//! a JSON string array under a single key in the durable store. Loaded once
//! when the search overlay opens; every mutation writes straight back.

use crate::store::LocalStore;

pub(crate) const RECENT_SEARCHES_KEY: &str = "recent_searches";
pub(crate) const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Default)]
pub(crate) struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    /// Loads the persisted list; missing or malformed data yields an empty
    /// list, never an error.
    pub(crate) fn load(store: &LocalStore) -> Self {
        let terms = store
            .get(RECENT_SEARCHES_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();

        Self { terms }
    }

    pub(crate) fn terms(&self) -> &[String] {
        &self.terms
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.terms.len()
    }

    /// Records a completed search at the front of the list.
    ///
    /// Whitespace-only terms are ignored. A term already on the list is
    /// promoted to the front rather than duplicated, and the list is
    /// truncated to [`MAX_RECENT_SEARCHES`] entries before persisting.
    pub(crate) fn add(&mut self, store: &LocalStore, term: &str) {
        if term.trim().is_empty() {
            return;
        }

        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(MAX_RECENT_SEARCHES);

        self.persist(store);
    }

    /// Drops every recorded term and removes the durable entry.
    pub(crate) fn clear(&mut self, store: &LocalStore) {
        self.terms.clear();
        if let Err(e) = store.remove(RECENT_SEARCHES_KEY) {
            tracing::warn!(error = %e, "failed to clear recent searches");
        }
    }

    fn persist(&self, store: &LocalStore) {
        match serde_json::to_string(&self.terms) {
            Ok(raw) => {
                if let Err(e) = store.set(RECENT_SEARCHES_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist recent searches");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode recent searches"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_are_most_recent_first() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut recent = RecentSearches::default();

        recent.add(&store, "dune");
        recent.add(&store, "alien");
        assert_eq!(recent.terms(), ["alien", "dune"]);
    }

    #[test]
    fn list_is_capped_at_five() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut recent = RecentSearches::default();

        for term in ["a", "b", "c", "d", "e", "f"] {
            recent.add(&store, term);
        }

        assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent.terms(), ["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn repeated_term_is_promoted_not_duplicated() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut recent = RecentSearches::default();

        recent.add(&store, "dune");
        recent.add(&store, "alien");
        recent.add(&store, "dune");

        assert_eq!(recent.terms(), ["dune", "alien"]);
    }

    #[test]
    fn blank_terms_are_ignored() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut recent = RecentSearches::default();

        recent.add(&store, "   ");
        assert!(recent.is_empty());
        assert_eq!(store.get(RECENT_SEARCHES_KEY).unwrap(), None);
    }

    #[test]
    fn additions_survive_a_reload() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut recent = RecentSearches::default();
        recent.add(&store, "dune");

        let reloaded = RecentSearches::load(&store);
        assert_eq!(reloaded.terms(), ["dune"]);
    }

    #[test]
    fn clear_empties_list_and_removes_durable_entry() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut recent = RecentSearches::default();
        recent.add(&store, "dune");

        recent.clear(&store);
        assert!(recent.is_empty());
        assert_eq!(store.get(RECENT_SEARCHES_KEY).unwrap(), None);

        // Reopening the overlay later sees no terms.
        assert!(RecentSearches::load(&store).is_empty());
    }

    #[test]
    fn malformed_stored_data_loads_as_empty() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set(RECENT_SEARCHES_KEY, "not json at all").unwrap();

        assert!(RecentSearches::load(&store).is_empty());
    }
}
