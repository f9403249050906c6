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

//! Render the one-line status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, MainView};

pub(super) fn draw_statusbar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(area);

    let hints = match app.main_view {
        MainView::Onboarding => "Enter continue · Esc quit",
        MainView::Home => "1-4 views · j/k move · Enter open · / search · q quit",
        MainView::Movies => "h/l pane · j/k move · Enter open · / search · q quit",
        MainView::Shows => "h/l pane · [/] carousel · Enter open · / search · q quit",
        MainView::Detail => "w watchlist · Esc back · / search · q quit",
        MainView::Profile => "j/k move · x remove · n/a/s/c prefs · q quit",
    };

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.hint_fg)),
        container[0],
    );

    if let Some(error) = &app.last_error {
        f.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.accent_colour))
                .alignment(Alignment::Right),
            container[1],
        );
    }
}
