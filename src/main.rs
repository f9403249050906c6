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

//! # StreamMax TUI.
//!
//! A terminal-based movie and TV discovery client backed by the TMDB
//! catalog.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, and
//!   all mutable application state.
//! * **Background Workers** handle catalog API requests: one general task
//!   worker, and a dedicated debounced dispatcher for the search overlay.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod browse;
mod components;
mod config;
mod detail;
mod events;
mod home;
mod model;
mod profile;
mod render;
mod shows;
mod store;
mod tasks;
mod theme;
mod tmdb;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

use crate::{
    browse::MovieBrowser,
    components::{OnboardingView, ProfileView, SearchOverlay, search::SearchInput},
    config::AppConfig,
    detail::DetailView,
    events::{AppEvent, process_events},
    home::HomeFeed,
    profile::ProfileStore,
    shows::ShowsBrowser,
    store::LocalStore,
    tasks::AppTask,
    theme::Theme,
    tmdb::Tmdb,
};

const DATABASE_FILE: &str = "streammax.db";
const LOG_FILE: &str = "streammax.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Onboarding,
    Home,
    Movies,
    Shows,
    Detail,
    Profile,
}

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) main_view: MainView,
    pub(crate) previous_view: MainView,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,
    pub(crate) search_tx: Sender<SearchInput>,

    pub(crate) store: LocalStore,
    pub(crate) profiles: ProfileStore,

    pub(crate) home: HomeFeed,
    pub(crate) movies: MovieBrowser,
    pub(crate) shows: ShowsBrowser,
    pub(crate) detail: DetailView,

    pub(crate) search: SearchOverlay,
    pub(crate) onboarding: OnboardingView,
    pub(crate) profile_view: ProfileView,

    pub(crate) last_error: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(
        config: AppConfig,
        task_tx: Sender<AppTask>,
        search_tx: Sender<SearchInput>,
    ) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let store = LocalStore::open(DATABASE_FILE)?;
        let profiles = ProfileStore::load(&store);

        let main_view = if profiles.is_onboarded() {
            MainView::Home
        } else {
            MainView::Onboarding
        };

        Ok(Self {
            config,
            theme: Theme::default(),
            main_view,
            previous_view: MainView::Home,
            event_tx,
            event_rx,
            task_tx,
            search_tx,
            store,
            profiles,
            home: HomeFeed::new(),
            movies: MovieBrowser::new(),
            shows: ShowsBrowser::new(),
            detail: DetailView::new(),
            search: SearchOverlay::new(),
            onboarding: OnboardingView::new(),
            profile_view: ProfileView::new(),
            last_error: None,
        })
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error
/// if any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = init_logging();

    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();
    let (search_tx, search_rx) = mpsc::channel();

    let mut app =
        App::new(config, task_tx, search_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx, search_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Routes `tracing` output to a log file.
///
/// The terminal itself belongs to the TUI, so nothing may write to stdout or
/// stderr while the application runs. The returned guard must stay alive for
/// the buffered writer to flush.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    match tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s against the catalog.
/// * A search worker implementing the debounced lookup dispatch.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
    search_rx: Receiver<SearchInput>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn the debounced search dispatcher with its own catalog client.
    let search_event_tx = app.event_tx.clone();
    components::search::spawn_search_worker(Tmdb::new(&app.config), search_rx, search_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the views from the catalog. Before
    // onboarding completes there is nothing to fetch yet.
    if app.profiles.is_onboarded() {
        app.task_tx.send(AppTask::FetchCatalog)?;
        app.task_tx.send(AppTask::FetchShows)?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
