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

//! UI rendering for the onboarding flow.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::onboarding::{ONBOARDING_GENRES, OnboardingStep, OnboardingView},
    render::Render,
    theme::Theme,
};

impl Render for OnboardingView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" Welcome to StreamMax ")
            .padding(Padding::uniform(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        match self.step {
            OnboardingStep::Welcome => {
                f.render_widget(
                    Paragraph::new("Your personal streaming guide")
                        .style(Style::default().fg(theme.title_fg).bold())
                        .alignment(Alignment::Center),
                    chunks[0],
                );
                f.render_widget(
                    Paragraph::new("Track what to watch across your services,\nsearch the catalog, and build a watchlist.")
                        .style(Style::default().fg(theme.overview_fg))
                        .alignment(Alignment::Center),
                    chunks[1],
                );
                f.render_widget(hint(theme, "Enter continue"), chunks[2]);
            }

            OnboardingStep::Name => {
                f.render_widget(
                    Paragraph::new("What should we call you?")
                        .style(Style::default().fg(theme.title_fg).bold()),
                    chunks[0],
                );

                let name_line = Line::from(vec![
                    Span::styled("> ", Style::default().fg(theme.accent_colour).bold()),
                    Span::raw(self.name_input.value()),
                ]);
                f.render_widget(Paragraph::new(name_line), chunks[1]);
                let cursor_x = chunks[1].x + 2 + self.name_input.cursor() as u16;
                f.set_cursor_position((cursor_x, chunks[1].y));

                f.render_widget(hint(theme, "Enter continue"), chunks[2]);
            }

            OnboardingStep::Genres => {
                f.render_widget(
                    Paragraph::new("Pick a few favourite genres")
                        .style(Style::default().fg(theme.title_fg).bold()),
                    chunks[0],
                );

                let items: Vec<ListItem> = ONBOARDING_GENRES
                    .iter()
                    .enumerate()
                    .map(|(i, genre)| {
                        let mark = if self.picked.contains(&i) { "[x]" } else { "[ ]" };
                        ListItem::new(format!("{} {}", mark, genre))
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
                    .highlight_symbol(">> ");
                f.render_stateful_widget(list, chunks[1], &mut self.genre_state);

                f.render_widget(hint(theme, "Space toggle · Enter finish"), chunks[2]);
            }
        }
    }
}

fn hint<'a>(theme: &Theme, text: &'a str) -> Paragraph<'a> {
    Paragraph::new(text).style(Style::default().fg(theme.hint_fg))
}
