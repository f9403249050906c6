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

//! Render the movies browser.
//!
//! A genre pane, the filtered title pane, and a featured strip of the top
//! rated titles across the whole trending list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{App, browse::BrowserPane, util};

pub(super) fn draw_movies(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_featured(f, chunks[0], app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(chunks[1]);

    draw_genre_pane(f, panes[0], app);
    draw_title_pane(f, panes[1], app);
}

fn draw_featured(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Award Winners ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for (i, title) in app.movies.featured().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", Style::default().fg(theme.border_colour)));
        }
        spans.push(Span::styled(title.name.clone(), Style::default().fg(theme.title_fg)));
        spans.push(Span::styled(
            format!(" {}", util::format::format_rating(title.vote_average)),
            Style::default().fg(theme.rating_fg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_genre_pane(f: &mut Frame, area: Rect, app: &mut App) {
    let mut items: Vec<ListItem> = vec![ListItem::new("All Movies")];
    items.extend(
        app.movies
            .genres
            .iter()
            .map(|genre| ListItem::new(genre.name.clone())),
    );

    let is_active = app.movies.active_pane == BrowserPane::Genres;
    let state = &mut app.movies.genre_state;
    render_list(f, area, " Genres ", items, state, is_active);
}

fn draw_title_pane(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let filtered = app.movies.filtered_titles();

    let pane_title = match app.movies.selected_genre_name() {
        Some(name) => format!(" {} ({}) ", name, filtered.len()),
        None => format!(" All Movies ({}) ", filtered.len()),
    };

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|title| {
            let year = util::format::release_year(&title.release_date).unwrap_or("----");
            ListItem::new(Line::from(vec![
                Span::styled(title.name.clone(), Style::default().fg(theme.title_fg)),
                Span::styled(format!("  ({})", year), Style::default().fg(theme.year_fg)),
                Span::styled(
                    format!("  * {}", util::format::format_rating(title.vote_average)),
                    Style::default().fg(theme.rating_fg),
                ),
            ]))
        })
        .collect();

    let is_active = app.movies.active_pane == BrowserPane::Titles;
    let state = &mut app.movies.title_state;
    render_list(f, area, &pane_title, items, state, is_active);
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
