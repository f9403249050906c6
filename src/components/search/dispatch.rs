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

//! Debounced search dispatch.
//!
//! A dedicated worker thread coalesces the rapidly-changing query string
//! into at most one catalog lookup per quiet period. Each incoming query
//! restarts the quiet period; when it elapses the latest value is looked up.
//! Every event sent back carries the query string that produced it, so the
//! UI thread can discard responses that no longer match the live query.
//!
//! At most one lookup is in flight from this thread at any time. A lookup
//! that is already running cannot be cancelled, only ignored at response
//! time.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

use crate::{events::AppEvent, tmdb::TitleSearch};

/// Quiet period between the last keystroke and the outbound lookup.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this (after trimming) are never dispatched.
pub(crate) const MIN_QUERY_LEN: usize = 2;

/// Input to the dispatcher from the UI thread.
#[derive(Debug)]
pub(crate) enum SearchInput {
    /// The live query changed to this value.
    Query(String),
    /// Drop whatever is pending; sent on clear and on overlay teardown.
    Cancel,
}

pub(crate) fn spawn_search_worker<C: TitleSearch>(
    catalog: C,
    input_rx: Receiver<SearchInput>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || run_search_worker(catalog, input_rx, event_tx));
}

fn run_search_worker<C: TitleSearch>(
    catalog: C,
    input_rx: Receiver<SearchInput>,
    event_tx: Sender<AppEvent>,
) {
    while let Ok(input) = input_rx.recv() {
        let mut pending = match input {
            SearchInput::Query(query) => Some(query),
            SearchInput::Cancel => None,
        };

        // Quiet period: every newer arrival replaces the pending query and
        // restarts the wait, a cancel drops it.
        while pending.is_some() {
            match input_rx.recv_timeout(SEARCH_DEBOUNCE) {
                Ok(SearchInput::Query(query)) => pending = Some(query),
                Ok(SearchInput::Cancel) => pending = None,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }

        let Some(query) = pending else { continue };
        if query.trim().chars().count() < MIN_QUERY_LEN {
            continue;
        }

        if event_tx.send(AppEvent::SearchStarted(query.clone())).is_err() {
            return;
        }

        match catalog.search_titles(&query) {
            Ok(titles) => {
                tracing::info!(query = %query, results = titles.len(), "title search completed");
                if event_tx
                    .send(AppEvent::SearchCompleted { query, titles })
                    .is_err()
                {
                    return;
                }
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "title search failed");
                if event_tx.send(AppEvent::SearchFailed { query }).is_err() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        Arc, Mutex,
        mpsc::{self, TryRecvError},
    };

    use crate::{
        model::{Title, TitleKind},
        tmdb::TmdbError,
    };

    fn title(id: i64, name: &str) -> Title {
        Title {
            id,
            kind: TitleKind::Movie,
            name: name.to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            genre_ids: vec![],
        }
    }

    /// Records every query it is asked for and returns a canned response.
    struct FakeCatalog {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl TitleSearch for FakeCatalog {
        fn search_titles(&self, query: &str) -> Result<Vec<Title>, TmdbError> {
            self.calls.lock().unwrap().push(query.to_string());
            if self.fail {
                Err(TmdbError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
            } else {
                Ok(vec![title(1, query)])
            }
        }
    }

    fn start_worker(fail: bool) -> (Sender<SearchInput>, Receiver<AppEvent>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let catalog = FakeCatalog {
            calls: Arc::clone(&calls),
            fail,
        };
        let (input_tx, input_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_search_worker(catalog, input_rx, event_tx);

        (input_tx, event_rx, calls)
    }

    fn settle() {
        thread::sleep(SEARCH_DEBOUNCE * 3);
    }

    #[test]
    fn rapid_keystrokes_collapse_to_one_lookup_of_final_value() {
        let (input_tx, event_rx, calls) = start_worker(false);

        for q in ["d", "du", "dun", "dune"] {
            input_tx.send(SearchInput::Query(q.to_string())).unwrap();
            thread::sleep(Duration::from_millis(30));
        }
        settle();

        assert_eq!(calls.lock().unwrap().as_slice(), ["dune"]);

        let started = event_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(started, AppEvent::SearchStarted(ref q) if q == "dune"));

        let completed = event_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        match completed {
            AppEvent::SearchCompleted { query, titles } => {
                assert_eq!(query, "dune");
                assert_eq!(titles.len(), 1);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn short_queries_are_never_dispatched() {
        let (input_tx, event_rx, calls) = start_worker(false);

        input_tx.send(SearchInput::Query("a".to_string())).unwrap();
        input_tx.send(SearchInput::Query(" z ".to_string())).unwrap();
        settle();

        assert!(calls.lock().unwrap().is_empty());
        assert!(matches!(event_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn cancel_during_quiet_period_drops_pending_lookup() {
        let (input_tx, event_rx, calls) = start_worker(false);

        input_tx.send(SearchInput::Query("dune".to_string())).unwrap();
        input_tx.send(SearchInput::Cancel).unwrap();
        settle();

        assert!(calls.lock().unwrap().is_empty());
        assert!(matches!(event_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn failed_lookup_reports_failure_with_query_tag() {
        let (input_tx, event_rx, _calls) = start_worker(true);

        input_tx.send(SearchInput::Query("dune".to_string())).unwrap();

        let started = event_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(started, AppEvent::SearchStarted(_)));

        let failed = event_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(failed, AppEvent::SearchFailed { ref query } if query == "dune"));
    }

    #[test]
    fn separate_quiet_periods_dispatch_separately() {
        let (input_tx, _event_rx, calls) = start_worker(false);

        input_tx.send(SearchInput::Query("dune".to_string())).unwrap();
        settle();
        input_tx.send(SearchInput::Query("alien".to_string())).unwrap();
        settle();

        assert_eq!(calls.lock().unwrap().as_slice(), ["dune", "alien"]);
    }
}
