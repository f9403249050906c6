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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! catalog requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into catalog API calls and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time to process, should be implemented as tasks. Other actions are likely
//! more suited to events. Debounced search dispatch has its own worker in
//! the search component and does not go through here.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{config::AppConfig, events::AppEvent, model::Title, tmdb::Tmdb};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Trending movies plus the genre table, shared by home and movies.
    FetchCatalog,
    /// The three TV sections shown on the shows view.
    FetchShows,
    /// Full detail, providers and similar titles for one entry.
    FetchDetail(Title),
}

pub(super) struct TaskContext<'a> {
    pub(super) tmdb: &'a Tmdb,
    pub(super) event_tx: &'a Sender<AppEvent>,
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns its own catalog client and enters a blocking loop,
/// listening for incoming [`AppTask`]s until the channel closes.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let tmdb = Tmdb::new(&config);

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                tmdb: &tmdb,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchCatalog => handlers::fetch_catalog(ctx),
        AppTask::FetchShows => handlers::fetch_shows(ctx),
        AppTask::FetchDetail(title) => handlers::fetch_detail(ctx, title),
    }
}
