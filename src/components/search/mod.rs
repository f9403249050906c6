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

//! Search overlay state management.
//!
//! The overlay owns the live query string, the current result list, the
//! selection cursor over it, and the recent-search list shown while the
//! query is empty. All transitions happen on the UI thread; the debounced
//! lookup itself runs on the dispatcher worker (see [`dispatch`]).
//!
//! The result list and the query are kept consistent with the last accepted
//! dispatch: every search event carries the query that produced it and is
//! discarded here unless that tag still matches the live query.

mod dispatch;
mod event;
mod recent;

pub(crate) use dispatch::{MIN_QUERY_LEN, SearchInput, spawn_search_worker};
pub(crate) use event::SearchAction;
pub(crate) use recent::RecentSearches;

use ratatui::widgets::ListState;
use tui_input::Input;

use crate::{model::Title, store::LocalStore};

/// What the overlay body currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchPhase {
    /// Query empty, at least one recent term recorded.
    Recent,
    /// A lookup is in flight for the live query.
    Loading,
    Results,
    /// A completed lookup found nothing for a query of searchable length.
    NoMatches,
    /// Nothing to show yet (query too short, no recent terms).
    Idle,
}

pub(crate) struct SearchOverlay {
    pub(crate) input: Input,
    pub(crate) results: Vec<Title>,
    pub(crate) cursor: Option<usize>,
    pub(crate) results_state: ListState,
    pub(crate) recent_state: ListState,
    pub(crate) loading: bool,
    pub(crate) recent: RecentSearches,
    pub(crate) is_active: bool,
}

impl SearchOverlay {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            results: Vec::new(),
            cursor: None,
            results_state: ListState::default(),
            recent_state: ListState::default(),
            loading: false,
            recent: RecentSearches::default(),
            is_active: false,
        }
    }

    /// Opens the overlay, loading the recent-search list from the store.
    pub(crate) fn open(&mut self, store: &LocalStore) {
        self.is_active = true;
        self.recent = RecentSearches::load(store);
        self.reset_session();
    }

    /// Resets the overlay; the events layer additionally cancels any pending
    /// dispatch so no late callback can touch this state.
    pub(crate) fn close(&mut self) {
        self.is_active = false;
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.input.reset();
        self.results.clear();
        self.loading = false;
        self.set_cursor(None);
        self.recent_state.select(None);
    }

    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn phase(&self) -> SearchPhase {
        if self.query().is_empty() && !self.recent.is_empty() {
            return SearchPhase::Recent;
        }
        if self.loading {
            return SearchPhase::Loading;
        }
        if !self.results.is_empty() {
            return SearchPhase::Results;
        }
        if self.query().trim().chars().count() >= MIN_QUERY_LEN {
            return SearchPhase::NoMatches;
        }

        SearchPhase::Idle
    }

    /// Registers an edit of the query text.
    ///
    /// A query below the searchable length clears the result list right away
    /// and cancels any pending dispatch; anything longer is handed to the
    /// debounced dispatcher.
    pub(crate) fn query_edited(&mut self) -> SearchAction {
        if self.query().trim().chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.loading = false;
            self.set_cursor(None);
            SearchAction::CancelPending
        } else {
            SearchAction::QueryChanged(self.query().to_string())
        }
    }

    /// Replaces the query wholesale (re-running a recent term).
    pub(crate) fn set_query(&mut self, term: &str) {
        self.input = Input::new(term.to_string());
        self.recent_state.select(None);
    }

    pub(crate) fn apply_search_started(&mut self, query: &str) {
        if self.is_active && query == self.query() {
            self.loading = true;
        }
    }

    /// Installs the results of a completed lookup, unless stale.
    ///
    /// A response tagged with anything other than the live query is dropped
    /// on the floor; so is any response arriving after the overlay closed.
    pub(crate) fn apply_search_completed(&mut self, query: &str, titles: Vec<Title>) {
        if !self.is_active || query != self.query() {
            return;
        }

        self.loading = false;
        self.results = titles;
        self.set_cursor(None);
    }

    pub(crate) fn apply_search_failed(&mut self, query: &str) {
        if !self.is_active || query != self.query() {
            return;
        }

        self.loading = false;
        self.results.clear();
        self.set_cursor(None);
    }

    /// Moves the selection cursor down one result, clamped to the last one.
    pub(crate) fn cursor_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let next = match self.cursor {
            Some(i) if i + 1 >= self.results.len() => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.set_cursor(Some(next));
    }

    /// Moves the selection cursor up one result; with no selection yet the
    /// first result becomes selected.
    pub(crate) fn cursor_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let next = match self.cursor {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.set_cursor(Some(next));
    }

    fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
        // The list state mirrors the cursor so the selected row is scrolled
        // into view when drawn.
        self.results_state.select(cursor);
    }

    pub(crate) fn selected(&self) -> Option<&Title> {
        self.cursor.and_then(|i| self.results.get(i))
    }

    /// Finalizes the current selection.
    ///
    /// Records the current query text (not the selected title's name) on the
    /// recent list and returns the title for the navigation collaborator.
    /// With nothing selected this is a no-op.
    pub(crate) fn commit(&mut self, store: &LocalStore) -> Option<Title> {
        let title = self.selected().cloned()?;
        let query = self.query().to_string();
        self.recent.add(store, &query);

        Some(title)
    }

    pub(crate) fn recent_down(&mut self) {
        let len = self.recent.len();
        if len == 0 {
            return;
        }
        let next = match self.recent_state.selected() {
            Some(i) if i + 1 >= len => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.recent_state.select(Some(next));
    }

    pub(crate) fn recent_up(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        let next = match self.recent_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.recent_state.select(Some(next));
    }

    pub(crate) fn selected_recent_term(&self) -> Option<String> {
        let index = self.recent_state.selected()?;
        self.recent.terms().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TitleKind;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn title(id: i64, name: &str) -> Title {
        Title {
            id,
            kind: TitleKind::Movie,
            name: name.to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: "2021-10-22".to_string(),
            vote_average: 7.8,
            genre_ids: vec![878],
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn typed(overlay: &mut SearchOverlay, store: &LocalStore, text: &str) -> Option<SearchAction> {
        let mut last = None;
        for c in text.chars() {
            last = overlay.process_event(&key(KeyCode::Char(c)), store);
        }
        last
    }

    fn open_overlay(store: &LocalStore) -> SearchOverlay {
        let mut overlay = SearchOverlay::new();
        overlay.open(store);
        overlay
    }

    #[test]
    fn short_query_clears_results_and_cancels() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        overlay.results = vec![title(1, "Dune")];

        let action = typed(&mut overlay, &store, "a");
        assert!(matches!(action, Some(SearchAction::CancelPending)));
        assert!(overlay.results.is_empty());
        assert_eq!(overlay.cursor, None);
        assert_eq!(overlay.phase(), SearchPhase::Idle);
    }

    #[test]
    fn searchable_query_is_dispatched_with_full_text() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);

        let action = typed(&mut overlay, &store, "dune");
        assert!(matches!(action, Some(SearchAction::QueryChanged(ref q)) if q == "dune"));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "ab");

        // The response for the superseded query "a" arrives late.
        overlay.apply_search_completed("a", vec![title(1, "Alien")]);
        assert!(overlay.results.is_empty());

        overlay.apply_search_completed("ab", vec![title(2, "Abyss")]);
        assert_eq!(overlay.results.len(), 1);
        assert_eq!(overlay.results[0].name, "Abyss");
        assert_eq!(overlay.cursor, None);
    }

    #[test]
    fn responses_after_close_are_discarded() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "dune");
        overlay.close();

        overlay.apply_search_completed("dune", vec![title(1, "Dune")]);
        assert!(overlay.results.is_empty());
        assert!(!overlay.loading);
    }

    #[test]
    fn loading_flag_follows_lookup_lifecycle() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "dune");

        overlay.apply_search_started("dune");
        assert!(overlay.loading);
        assert_eq!(overlay.phase(), SearchPhase::Loading);

        overlay.apply_search_failed("dune");
        assert!(!overlay.loading);
        assert!(overlay.results.is_empty());
        assert_eq!(overlay.phase(), SearchPhase::NoMatches);
    }

    #[test]
    fn cursor_stays_inside_result_bounds() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "dune");
        overlay.apply_search_completed("dune", vec![title(1, "a"), title(2, "b"), title(3, "c")]);

        // Up from no selection lands on the first result.
        overlay.cursor_up();
        assert_eq!(overlay.cursor, Some(0));
        overlay.cursor_up();
        assert_eq!(overlay.cursor, Some(0));

        overlay.cursor_down();
        overlay.cursor_down();
        assert_eq!(overlay.cursor, Some(2));
        // Clamped at the last result, no wraparound.
        overlay.cursor_down();
        assert_eq!(overlay.cursor, Some(2));
    }

    #[test]
    fn arrows_are_noops_with_no_results() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "zz");

        overlay.cursor_up();
        assert_eq!(overlay.cursor, None);
        overlay.cursor_down();
        assert_eq!(overlay.cursor, None);
    }

    #[test]
    fn enter_commits_cursor_position_and_records_query() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "dune");
        overlay.apply_search_completed(
            "dune",
            vec![title(1, "Dune"), title(2, "Dune: Part Two"), title(3, "Jodorowsky's Dune")],
        );

        overlay.process_event(&key(KeyCode::Down), &store);
        overlay.process_event(&key(KeyCode::Down), &store);
        let action = overlay.process_event(&key(KeyCode::Enter), &store);

        match action {
            Some(SearchAction::Select(selected)) => assert_eq!(selected.id, 2),
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(overlay.recent.terms(), ["dune"]);
    }

    #[test]
    fn enter_without_selection_is_a_noop() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "dune");
        overlay.apply_search_completed("dune", vec![title(1, "Dune")]);

        let action = overlay.process_event(&key(KeyCode::Enter), &store);
        assert!(action.is_none());
        assert!(overlay.recent.is_empty());
    }

    #[test]
    fn escape_closes_unconditionally() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        typed(&mut overlay, &store, "dune");

        let action = overlay.process_event(&key(KeyCode::Esc), &store);
        assert!(matches!(action, Some(SearchAction::Close)));
    }

    #[test]
    fn recent_terms_show_only_with_empty_query() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        overlay.recent.add(&store, "dune");

        assert_eq!(overlay.phase(), SearchPhase::Recent);

        typed(&mut overlay, &store, "a");
        assert_ne!(overlay.phase(), SearchPhase::Recent);
    }

    #[test]
    fn enter_on_recent_term_reruns_it() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        overlay.recent.add(&store, "alien");
        overlay.recent.add(&store, "dune");

        overlay.process_event(&key(KeyCode::Down), &store);
        overlay.process_event(&key(KeyCode::Down), &store);
        let action = overlay.process_event(&key(KeyCode::Enter), &store);

        assert!(matches!(action, Some(SearchAction::QueryChanged(ref q)) if q == "alien"));
        assert_eq!(overlay.query(), "alien");
    }

    #[test]
    fn delete_clears_recent_terms_durably() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut overlay = open_overlay(&store);
        overlay.recent.add(&store, "dune");

        overlay.process_event(&key(KeyCode::Delete), &store);
        assert!(overlay.recent.is_empty());

        // Reopening sees no terms either.
        let reopened = open_overlay(&store);
        assert!(reopened.recent.is_empty());
        assert_eq!(reopened.phase(), SearchPhase::Idle);
    }
}
