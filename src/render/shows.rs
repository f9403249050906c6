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

//! Render the TV shows browser.
//!
//! The featured carousel on top, then the three catalog sections side by
//! side.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::{App, model::Title, shows::ShowsPane, util};

pub(super) fn draw_shows(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    draw_carousel(f, chunks[0], app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    let theme_popular = app.shows.active_pane == ShowsPane::Popular;
    let theme_top = app.shows.active_pane == ShowsPane::TopRated;
    let theme_air = app.shows.active_pane == ShowsPane::OnAir;

    let popular_items = show_items(&app.shows.popular);
    render_section(f, panes[0], " Popular Now ", popular_items, &mut app.shows.popular_state, theme_popular);

    let top_items = show_items(&app.shows.top_rated);
    render_section(f, panes[1], " Top Rated ", top_items, &mut app.shows.top_rated_state, theme_top);

    let air_items = show_items(&app.shows.on_air);
    render_section(f, panes[2], " Currently Airing ", air_items, &mut app.shows.on_air_state, theme_air);
}

fn draw_carousel(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let position = if app.shows.featured().is_empty() {
        String::from(" Featured ")
    } else {
        format!(
            " Featured {}/{} ",
            app.shows.carousel_index + 1,
            app.shows.featured().len()
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(position)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(show) = app.shows.carousel_show() else {
        let notice = if app.shows.loading {
            "Loading TV shows..."
        } else {
            "No shows to feature."
        };
        f.render_widget(
            Paragraph::new(notice).style(Style::default().fg(theme.hint_fg)),
            inner,
        );
        return;
    };

    let year = util::format::release_year(&show.release_date).unwrap_or("----");
    let lines = vec![
        Line::from(vec![
            Span::styled(show.name.clone(), Style::default().fg(theme.title_fg).bold()),
            Span::styled(format!("  ({})", year), Style::default().fg(theme.year_fg)),
            Span::styled(
                format!("  * {}", util::format::format_rating(show.vote_average)),
                Style::default().fg(theme.rating_fg),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            show.overview.clone(),
            Style::default().fg(theme.overview_fg),
        )),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn show_items(shows: &[Title]) -> Vec<ListItem<'static>> {
    shows
        .iter()
        .map(|show| {
            let year = util::format::release_year(&show.release_date).unwrap_or("----");
            ListItem::new(format!(
                "{}  ({})  * {}",
                show.name,
                year,
                util::format::format_rating(show.vote_average)
            ))
        })
        .collect()
}

fn render_section(
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
