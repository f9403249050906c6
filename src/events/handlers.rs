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

use std::time::Instant;

use anyhow::Result;

use crate::{
    App, MainView,
    components::search::SearchInput,
    model::{Genre, Title, TitleDetail},
    tasks::AppTask,
};

pub(super) fn handle_tick(app: &mut App) {
    app.shows.on_tick(Instant::now());
}

pub(super) fn handle_set_main_view(app: &mut App, view: MainView) {
    app.main_view = view;
}

/// The trending list and genre table feed both the home and movies views.
pub(super) fn handle_catalog_ready(app: &mut App, titles: Vec<Title>, genres: Vec<Genre>) {
    app.home.set_catalog(titles.clone(), genres.clone());
    app.movies.set_catalog(titles, genres);
}

pub(super) fn handle_shows_ready(
    app: &mut App,
    popular: Vec<Title>,
    top_rated: Vec<Title>,
    on_air: Vec<Title>,
) {
    app.shows.set_shows(popular, top_rated, on_air);
}

pub(super) fn handle_detail_ready(app: &mut App, detail: TitleDetail) {
    app.detail.apply(detail);
}

pub(super) fn handle_detail_failed(app: &mut App, title_id: i64) {
    app.detail.fail(title_id);
}

pub(super) fn handle_open_search(app: &mut App) {
    app.search.open(&app.store);
}

/// Teardown hook for the search experience: beyond resetting the overlay,
/// any pending debounced dispatch is cancelled so a late callback cannot
/// mutate state after the overlay closed.
pub(super) fn handle_close_search(app: &mut App) -> Result<()> {
    app.search.close();
    app.search_tx.send(SearchInput::Cancel)?;

    Ok(())
}

pub(super) fn handle_search_started(app: &mut App, query: &str) {
    app.search.apply_search_started(query);
}

pub(super) fn handle_search_completed(app: &mut App, query: &str, titles: Vec<Title>) {
    app.search.apply_search_completed(query, titles);
}

pub(super) fn handle_search_failed(app: &mut App, query: &str) {
    app.search.apply_search_failed(query);
}

/// Navigation collaborator: show the title immediately and fetch the rest.
pub(super) fn handle_open_detail(app: &mut App, title: Title) -> Result<()> {
    if app.main_view != MainView::Detail {
        app.previous_view = app.main_view;
    }
    app.detail.begin(title.clone());
    app.task_tx.send(AppTask::FetchDetail(title))?;
    app.main_view = MainView::Detail;

    Ok(())
}

pub(super) fn handle_close_detail(app: &mut App) {
    app.detail.clear();
    app.main_view = app.previous_view;
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::error!(message = %message, "worker error");
    // A failed fetch leaves the affected view empty rather than spinning.
    app.home.loading = false;
    app.shows.loading = false;
    app.last_error = Some(message);
}
