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

//! Render the home feed.
//!
//! A hero banner for the top trending title, the navigable trending list,
//! and a genre breakdown of the trending catalog.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::{App, util};

pub(super) fn draw_home(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    draw_hero(f, chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    draw_trending(f, columns[0], app);
    draw_genres(f, columns[1], app);
}

fn draw_hero(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(hero) = app.home.hero() else {
        let notice = if app.home.loading {
            "Loading the catalog..."
        } else {
            "The catalog is empty right now."
        };
        f.render_widget(
            Paragraph::new(notice).style(Style::default().fg(theme.hint_fg)),
            inner,
        );
        return;
    };

    let year = util::format::release_year(&hero.release_date).unwrap_or("----");
    let heading = Line::from(vec![
        Span::styled("Trending now  ", Style::default().fg(theme.accent_colour).bold()),
        Span::styled(hero.name.clone(), Style::default().fg(theme.title_fg).bold()),
        Span::styled(format!("  ({})", year), Style::default().fg(theme.year_fg)),
        Span::styled(
            format!("  * {}", util::format::format_rating(hero.vote_average)),
            Style::default().fg(theme.rating_fg),
        ),
    ]);

    let lines = vec![
        heading,
        Line::raw(""),
        Line::from(Span::styled(
            hero.overview.clone(),
            Style::default().fg(theme.overview_fg),
        )),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_trending(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let items: Vec<ListItem> = app
        .home
        .trending
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

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" Trending Movies "),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.home.trending_state);
}

fn draw_genres(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Browse by Genre ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = app
        .home
        .genre_counts()
        .into_iter()
        .map(|(genre, count)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", genre.name), Style::default().fg(theme.title_fg)),
                Span::styled(format!("{:>3}", count), Style::default().fg(theme.year_fg)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
