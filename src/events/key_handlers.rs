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

//! Keyboard input routing.
//!
//! Input is claimed in priority order: the onboarding flow while it is
//! running, then the search overlay while it is open, then the active view,
//! and finally the global bindings. The overlay swallows everything it
//! receives so stray keys cannot leak into the view underneath it.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App, MainView,
    browse::BrowserPane,
    components::{
        onboarding::OnboardingAction, profile::ProfileAction, search::SearchAction,
        search::SearchInput,
    },
    events::AppEvent,
    tasks::AppTask,
};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.main_view == MainView::Onboarding {
        if key.code == KeyCode::Esc {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        if let Some(OnboardingAction::Complete { name, favourite_genres }) =
            app.onboarding.process_event(&event)
        {
            app.profiles
                .complete_onboarding(&app.store, name, favourite_genres)?;
            app.task_tx.send(AppTask::FetchCatalog)?;
            app.task_tx.send(AppTask::FetchShows)?;
            app.event_tx.send(AppEvent::SetMainView(MainView::Home))?;
        }
        return Ok(());
    }

    if app.search.is_active {
        match app.search.process_event(&event, &app.store) {
            Some(SearchAction::QueryChanged(query)) => {
                app.search_tx.send(SearchInput::Query(query))?
            }
            Some(SearchAction::CancelPending) => app.search_tx.send(SearchInput::Cancel)?,
            Some(SearchAction::Select(title)) => {
                app.event_tx.send(AppEvent::CloseSearch)?;
                app.event_tx.send(AppEvent::OpenDetail(title))?;
            }
            Some(SearchAction::Close) => app.event_tx.send(AppEvent::CloseSearch)?,
            None => {}
        }
        return Ok(());
    }

    if app.main_view == MainView::Profile {
        let action = app
            .profile_view
            .process_event(&event, &mut app.profiles, &app.store)?;
        if let Some(ProfileAction::OpenTitle(title)) = action {
            app.event_tx.send(AppEvent::OpenDetail(title))?;
            return Ok(());
        }
    }

    process_global_key_event(app, key)
}

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: Life-cycle events like exiting the program.
/// * **Navigation**: Switching views and walking the lists of the active one.
/// * **Discovery**: Opening the search overlay and the detail view.
/// * **Watchlist**: Saving the currently shown title to the profile.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('/') => app.event_tx.send(AppEvent::OpenSearch)?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Home))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::Movies))?,
        KeyCode::Char('3') => app.event_tx.send(AppEvent::SetMainView(MainView::Shows))?,
        KeyCode::Char('4') => app.event_tx.send(AppEvent::SetMainView(MainView::Profile))?,

        KeyCode::Esc if app.main_view == MainView::Detail => {
            app.event_tx.send(AppEvent::CloseDetail)?;
        }

        KeyCode::Char('w') if app.main_view == MainView::Detail => {
            if let Some(title) = app.detail.title.clone() {
                app.profiles.toggle_watchlist(&app.store, &title)?;
            }
        }

        // Navigation: Down / j
        KeyCode::Char('j') | KeyCode::Down => match app.main_view {
            MainView::Home => app.home.next_title(),
            MainView::Movies => app.movies.next_row(),
            MainView::Shows => app.shows.next_row(),
            _ => {}
        },

        // Navigation: Up / k
        KeyCode::Char('k') | KeyCode::Up => match app.main_view {
            MainView::Home => app.home.previous_title(),
            MainView::Movies => app.movies.previous_row(),
            MainView::Shows => app.shows.previous_row(),
            _ => {}
        },

        // Pane Navigation
        KeyCode::Char('h') | KeyCode::Left => match app.main_view {
            MainView::Movies => app.movies.previous_pane(),
            MainView::Shows => app.shows.previous_pane(),
            _ => {}
        },
        KeyCode::Char('l') | KeyCode::Right => match app.main_view {
            MainView::Movies => app.movies.next_pane(),
            MainView::Shows => app.shows.next_pane(),
            _ => {}
        },

        // Carousel
        KeyCode::Char('[') if app.main_view == MainView::Shows => {
            app.shows.carousel_previous(Instant::now());
        }
        KeyCode::Char(']') if app.main_view == MainView::Shows => {
            app.shows.carousel_next(Instant::now());
        }

        KeyCode::Enter => match app.main_view {
            MainView::Home => {
                if let Some(title) = app.home.selected_title().cloned() {
                    app.event_tx.send(AppEvent::OpenDetail(title))?;
                }
            }
            MainView::Movies => {
                if app.movies.active_pane == BrowserPane::Genres {
                    app.movies.next_pane();
                } else if let Some(title) = app.movies.selected_title().cloned() {
                    app.event_tx.send(AppEvent::OpenDetail(title))?;
                }
            }
            MainView::Shows => {
                if let Some(title) = app.shows.selected_title().cloned() {
                    app.event_tx.send(AppEvent::OpenDetail(title))?;
                }
            }
            _ => {}
        },

        _ => {}
    }

    Ok(())
}
