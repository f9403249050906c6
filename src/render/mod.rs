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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface. The search
//! overlay, when open, is drawn last so it floats above the active view.

mod browse;
mod detail;
mod home;
mod shows;
mod statusbar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{App, MainView, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Partitions the screen into the active view and the status bar, maps the
/// current [`App`] state into widgets, and applies the application theme.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    // Outer layout: main content, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.main_view {
        MainView::Onboarding => app.onboarding.draw(f, outer[0], &theme),
        MainView::Home => home::draw_home(f, outer[0], app),
        MainView::Movies => browse::draw_movies(f, outer[0], app),
        MainView::Shows => shows::draw_shows(f, outer[0], app),
        MainView::Detail => detail::draw_detail(f, outer[0], app),
        MainView::Profile => app.profile_view.draw(f, outer[0], app.profiles.profile(), &theme),
    }

    statusbar::draw_statusbar(f, outer[1], app);

    if app.search.is_active {
        app.search.draw(f, area, &theme);
    }
}
