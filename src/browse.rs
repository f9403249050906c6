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

//! Movie browser state management.
//!
//! This module provides state for the movies view: a genre pane and a title
//! pane. Picking a genre filters the title list client-side by genre-id
//! membership; the featured strip is the only place the catalog order is not
//! preserved (top titles by rating, descending).

use std::cmp::Ordering;

use ratatui::widgets::ListState;

use crate::model::{Genre, Title};

const FEATURED_COUNT: usize = 5;

#[derive(Default, Eq, PartialEq)]
pub(crate) enum BrowserPane {
    #[default]
    Genres,
    Titles,
}

#[derive(Default)]
pub(crate) struct MovieBrowser {
    pub(crate) active_pane: BrowserPane,

    pub(crate) titles: Vec<Title>,
    pub(crate) genres: Vec<Genre>,
    pub(crate) selected_genre: Option<i64>,

    pub(crate) genre_state: ListState,
    pub(crate) title_state: ListState,
}

impl MovieBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_catalog(&mut self, titles: Vec<Title>, genres: Vec<Genre>) {
        self.titles = titles;
        self.genres = genres;
        self.selected_genre = None;
        // Row 0 of the genre pane is the implicit "All Movies" entry.
        self.genre_state.select(Some(0));
        self.title_state
            .select((!self.titles.is_empty()).then_some(0));
    }

    /// Titles matching the selected genre, in catalog order.
    pub(crate) fn filtered_titles(&self) -> Vec<&Title> {
        match self.selected_genre {
            Some(genre_id) => self
                .titles
                .iter()
                .filter(|title| title.has_genre(genre_id))
                .collect(),
            None => self.titles.iter().collect(),
        }
    }

    /// The top titles by rating, for the featured strip.
    pub(crate) fn featured(&self) -> Vec<&Title> {
        let mut ranked: Vec<&Title> = self.titles.iter().collect();
        ranked.sort_by(|a, b| {
            b.vote_average
                .partial_cmp(&a.vote_average)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(FEATURED_COUNT);
        ranked
    }

    pub(crate) fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            BrowserPane::Genres => BrowserPane::Titles,
            BrowserPane::Titles => BrowserPane::Genres,
        };
    }

    pub(crate) fn previous_pane(&mut self) {
        // Two panes, so forwards and backwards meet.
        self.next_pane();
    }

    pub(crate) fn next_row(&mut self) {
        match self.active_pane {
            BrowserPane::Genres => {
                Self::next(&mut self.genre_state, self.genres.len() + 1);
                self.apply_genre_selection();
            }
            BrowserPane::Titles => {
                let len = self.filtered_titles().len();
                Self::next(&mut self.title_state, len);
            }
        }
    }

    pub(crate) fn previous_row(&mut self) {
        match self.active_pane {
            BrowserPane::Genres => {
                Self::previous(&mut self.genre_state, self.genres.len() + 1);
                self.apply_genre_selection();
            }
            BrowserPane::Titles => {
                let len = self.filtered_titles().len();
                Self::previous(&mut self.title_state, len);
            }
        }
    }

    fn apply_genre_selection(&mut self) {
        self.selected_genre = match self.genre_state.selected() {
            Some(0) | None => None,
            Some(i) => self.genres.get(i - 1).map(|g| g.id),
        };

        let len = self.filtered_titles().len();
        self.title_state.select((len > 0).then_some(0));
    }

    pub(crate) fn selected_title(&self) -> Option<&Title> {
        let index = self.title_state.selected()?;
        self.filtered_titles().get(index).copied()
    }

    pub(crate) fn selected_genre_name(&self) -> Option<&str> {
        let genre_id = self.selected_genre?;
        self.genres
            .iter()
            .find(|g| g.id == genre_id)
            .map(|g| g.name.as_str())
    }

    fn next(state: &mut ListState, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    fn previous(state: &mut ListState, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TitleKind;

    fn title(id: i64, rating: f64, genre_ids: Vec<i64>) -> Title {
        Title {
            id,
            kind: TitleKind::Movie,
            name: format!("Title {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: rating,
            genre_ids,
        }
    }

    fn browser() -> MovieBrowser {
        let mut browser = MovieBrowser::new();
        browser.set_catalog(
            vec![
                title(1, 6.1, vec![28]),
                title(2, 8.4, vec![878]),
                title(3, 7.2, vec![28, 878]),
            ],
            vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 878, name: "Science Fiction".to_string() },
            ],
        );
        browser
    }

    #[test]
    fn no_genre_selection_shows_everything() {
        let browser = browser();
        assert_eq!(browser.filtered_titles().len(), 3);
    }

    #[test]
    fn genre_selection_filters_by_membership() {
        let mut browser = browser();
        // Move from "All Movies" onto Action.
        browser.next_row();

        assert_eq!(browser.selected_genre, Some(28));
        let filtered: Vec<i64> = browser.filtered_titles().iter().map(|t| t.id).collect();
        assert_eq!(filtered, vec![1, 3]);
        assert_eq!(browser.selected_genre_name(), Some("Action"));
    }

    #[test]
    fn wrapping_back_to_all_clears_the_filter() {
        let mut browser = browser();
        browser.next_row();
        browser.previous_row();

        assert_eq!(browser.selected_genre, None);
        assert_eq!(browser.filtered_titles().len(), 3);
    }

    #[test]
    fn featured_is_top_rated_first() {
        let browser = browser();
        let featured: Vec<i64> = browser.featured().iter().map(|t| t.id).collect();
        assert_eq!(featured, vec![2, 3, 1]);
    }

    #[test]
    fn title_selection_follows_the_filter() {
        let mut browser = browser();
        browser.next_row();
        browser.next_pane();
        browser.next_row();

        assert_eq!(browser.selected_title().unwrap().id, 3);
    }
}
