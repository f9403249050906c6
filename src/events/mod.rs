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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every state change travels through [`AppEvent`]: keyboard
//! input, tick pulses, worker results and internal navigation all arrive on
//! one channel, are applied to the [`App`] state on the UI thread, and are
//! followed by a redraw. That single channel is the application's explicit
//! state-change notification mechanism; nothing re-renders implicitly.
//!
//! # Organization
//!
//! * [`handlers`]: One handler per event variant.
//! * [`key_handlers`]: Routing of raw keyboard input to the active view.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    model::{Genre, Title, TitleDetail},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    SetMainView(MainView),

    CatalogReady { titles: Vec<Title>, genres: Vec<Genre> },
    ShowsReady { popular: Vec<Title>, top_rated: Vec<Title>, on_air: Vec<Title> },

    DetailReady(Box<TitleDetail>),
    DetailFailed { title_id: i64 },

    OpenSearch,
    CloseSearch,
    SearchStarted(String),
    SearchCompleted { query: String, titles: Vec<Title> },
    SearchFailed { query: String },

    OpenDetail(Title),
    CloseDetail,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::Tick => handlers::handle_tick(app),
            AppEvent::SetMainView(view) => handlers::handle_set_main_view(app, view),
            AppEvent::CatalogReady { titles, genres } => {
                handlers::handle_catalog_ready(app, titles, genres)
            }
            AppEvent::ShowsReady { popular, top_rated, on_air } => {
                handlers::handle_shows_ready(app, popular, top_rated, on_air)
            }
            AppEvent::DetailReady(detail) => handlers::handle_detail_ready(app, *detail),
            AppEvent::DetailFailed { title_id } => handlers::handle_detail_failed(app, title_id),
            AppEvent::OpenSearch => handlers::handle_open_search(app),
            AppEvent::CloseSearch => handlers::handle_close_search(app)?,
            AppEvent::SearchStarted(query) => handlers::handle_search_started(app, &query),
            AppEvent::SearchCompleted { query, titles } => {
                handlers::handle_search_completed(app, &query, titles)
            }
            AppEvent::SearchFailed { query } => handlers::handle_search_failed(app, &query),
            AppEvent::OpenDetail(title) => handlers::handle_open_detail(app, title)?,
            AppEvent::CloseDetail => handlers::handle_close_detail(app),
            AppEvent::Error(message) => handlers::handle_error(app, message),
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
