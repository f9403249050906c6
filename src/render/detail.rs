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

//! Render the title detail view.
//!
//! The base list-row data is shown immediately; runtime, resolved genres,
//! streaming providers and similar shows appear once the background fetch
//! lands.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{App, util};

pub(super) fn draw_detail(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let Some(title) = &app.detail.title else {
        return;
    };

    let saved = app.profiles.is_in_watchlist(title.id);
    let heading = if saved {
        format!(" {} [saved] ", title.name)
    } else {
        format!(" {} ", title.name)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(heading)
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let year = util::format::release_year(&title.release_date).unwrap_or("----");
    let mut facts = vec![
        Span::styled(format!("({})", year), Style::default().fg(theme.year_fg)),
        Span::styled(
            format!("  * {}", util::format::format_rating(title.vote_average)),
            Style::default().fg(theme.rating_fg),
        ),
    ];

    if let Some(detail) = &app.detail.detail {
        if let Some(runtime) = detail.runtime {
            facts.push(Span::styled(
                format!("  {}", util::format::format_runtime(runtime)),
                Style::default().fg(theme.year_fg),
            ));
        }
        if !detail.genres.is_empty() {
            let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
            facts.push(Span::styled(
                format!("  {}", names.join(" / ")),
                Style::default().fg(theme.overview_fg),
            ));
        }
    } else if app.detail.loading {
        facts.push(Span::styled("  loading...", Style::default().fg(theme.hint_fg)));
    }

    f.render_widget(Paragraph::new(Line::from(facts)), chunks[0]);

    let mut body: Vec<Line> = Vec::new();
    let overview = app
        .detail
        .detail
        .as_ref()
        .map(|d| d.title.overview.as_str())
        .unwrap_or(title.overview.as_str());
    body.push(Line::from(Span::styled(
        overview.to_string(),
        Style::default().fg(theme.overview_fg),
    )));
    body.push(Line::raw(""));

    if let Some(detail) = &app.detail.detail {
        let region = app.config.watch_region.as_str();
        body.push(Line::from(Span::styled(
            format!("Where to watch ({})", region),
            Style::default().fg(theme.accent_colour).bold(),
        )));
        if detail.providers.is_empty() {
            body.push(Line::from(Span::styled(
                "  No streaming offers found.",
                Style::default().fg(theme.hint_fg),
            )));
        } else {
            for provider in &detail.providers {
                body.push(Line::raw(format!("  {}", provider.provider_name)));
            }
        }
        body.push(Line::raw(""));

        if !detail.similar.is_empty() {
            body.push(Line::from(Span::styled(
                "Similar shows",
                Style::default().fg(theme.accent_colour).bold(),
            )));
            for show in detail.similar.iter().take(6) {
                body.push(Line::raw(format!(
                    "  {}  * {}",
                    show.name,
                    util::format::format_rating(show.vote_average)
                )));
            }
            body.push(Line::raw(""));
        }

        if let Some(poster_url) = &detail.poster_url {
            body.push(Line::from(vec![
                Span::styled("Poster: ", Style::default().fg(theme.hint_fg)),
                Span::styled(poster_url.clone(), Style::default().fg(theme.year_fg)),
            ]));
        }
    }

    f.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[1]);
}
