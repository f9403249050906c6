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

//! UI rendering for the search overlay.
//!
//! The overlay floats above whichever view is active: a query line at the
//! top, then either the recent-search list, a loading notice, the result
//! list, or the empty states, depending on the overlay phase.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::search::{SearchOverlay, SearchPhase},
    render::Render,
    theme::Theme,
    util,
};

impl Render for SearchOverlay {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let overlay = centered_rect(area, 70, 80);

        f.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.overlay_colour));

        let inner = block.inner(overlay);
        f.render_widget(block, overlay);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_query_line(f, chunks[0], theme);

        match self.phase() {
            SearchPhase::Recent => self.draw_recent(f, chunks[2], theme),
            SearchPhase::Loading => draw_notice(f, chunks[2], theme, "Searching..."),
            SearchPhase::Results => self.draw_results(f, chunks[2], theme),
            SearchPhase::NoMatches => {
                let notice = format!("No results found for \"{}\"", self.query());
                draw_notice(f, chunks[2], theme, &notice);
            }
            SearchPhase::Idle => {
                draw_notice(f, chunks[2], theme, "Type at least 2 characters to search")
            }
        }

        let hints = match self.phase() {
            SearchPhase::Recent => "Up/Down select · Enter search again · Del clear all · Esc close",
            _ => "Up/Down select · Enter open · Esc close",
        };
        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme.hint_fg)),
            chunks[3],
        );
    }
}

impl SearchOverlay {
    fn draw_query_line(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let query_line = Line::from(vec![
            Span::styled("/ ", Style::default().fg(theme.accent_colour).bold()),
            Span::raw(self.input.value()),
        ]);
        f.render_widget(Paragraph::new(query_line), area);

        let cursor_x = area.x + 2 + self.input.cursor() as u16;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
    }

    fn draw_recent(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .recent
            .terms()
            .iter()
            .map(|term| ListItem::new(format!("  {}", term)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .title(Line::from("Recent Searches").style(Style::default().fg(theme.hint_fg))),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.recent_state);
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .results
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
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        // The stateful render keeps the cursor row scrolled into view.
        f.render_stateful_widget(list, area, &mut self.results_state);
    }
}

fn draw_notice(f: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.overview_fg)),
        area,
    );
}

/// A rectangle centered in `area`, sized by percentage of it.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
