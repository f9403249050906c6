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

//! UI rendering for the profile page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    components::profile::ProfileView, profile::UserProfile, theme::Theme, util,
};

impl ProfileView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, profile: &UserProfile, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.draw_identity(f, chunks[0], profile, theme);
        self.draw_watchlist(f, chunks[1], profile, theme);
    }

    fn draw_identity(&self, f: &mut Frame, area: Rect, profile: &UserProfile, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Profile ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let prefs = &profile.preferences;
        let on_off = |v: bool| if v { "on" } else { "off" };

        let genres = if profile.favourite_genres.is_empty() {
            "none picked".to_string()
        } else {
            profile.favourite_genres.join(", ")
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(profile.name.clone(), Style::default().fg(theme.title_fg).bold()),
            ]),
            Line::from(Span::styled(profile.email.clone(), Style::default().fg(theme.year_fg))),
            Line::raw(""),
            Line::from(Span::styled(profile.bio.clone(), Style::default().fg(theme.overview_fg))),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Favourite genres: ", Style::default().fg(theme.hint_fg)),
                Span::raw(genres),
            ]),
            Line::raw(""),
            Line::from(Span::styled("Preferences", Style::default().fg(theme.accent_colour).bold())),
            Line::raw(format!("  [n] notifications  {}", on_off(prefs.notifications))),
            Line::raw(format!("  [a] autoplay       {}", on_off(prefs.autoplay))),
            Line::raw(format!("  [s] subtitles      {}", on_off(prefs.subtitles))),
            Line::raw(format!("  [c] quality        {}", prefs.quality.label())),
            Line::raw(format!("      language       {}", prefs.language)),
        ];

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_watchlist(&mut self, f: &mut Frame, area: Rect, profile: &UserProfile, theme: &Theme) {
        let title = format!(" Watchlist ({}) ", profile.watchlist.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(title);

        if profile.watchlist.is_empty() {
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new("Nothing saved yet. Press w on any title to add it.")
                    .style(Style::default().fg(theme.hint_fg)),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = profile
            .watchlist
            .iter()
            .map(|t| {
                let year = util::format::release_year(&t.release_date).unwrap_or("----");
                ListItem::new(Line::from(vec![
                    Span::styled(t.name.clone(), Style::default().fg(theme.title_fg)),
                    Span::styled(format!("  ({})", year), Style::default().fg(theme.year_fg)),
                    Span::styled(
                        format!("  * {}", util::format::format_rating(t.vote_average)),
                        Style::default().fg(theme.rating_fg),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.watchlist_state);
    }
}
