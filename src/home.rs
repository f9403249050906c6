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

//! Home feed state management.
//!
//! The home feed shows a hero banner for the top trending title, a trending
//! row the user can walk through, and a per-genre breakdown of the trending
//! list.

use ratatui::widgets::ListState;

use crate::model::{Genre, Title};

#[derive(Default)]
pub(crate) struct HomeFeed {
    pub(crate) trending: Vec<Title>,
    pub(crate) genres: Vec<Genre>,
    pub(crate) trending_state: ListState,
    pub(crate) loading: bool,
}

impl HomeFeed {
    pub(crate) fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub(crate) fn set_catalog(&mut self, trending: Vec<Title>, genres: Vec<Genre>) {
        self.trending = trending;
        self.genres = genres;
        self.loading = false;
        self.trending_state
            .select((!self.trending.is_empty()).then_some(0));
    }

    /// The banner title: the top trending entry.
    pub(crate) fn hero(&self) -> Option<&Title> {
        self.trending.first()
    }

    pub(crate) fn selected_title(&self) -> Option<&Title> {
        let index = self.trending_state.selected()?;
        self.trending.get(index)
    }

    pub(crate) fn next_title(&mut self) {
        Self::next(&mut self.trending_state, self.trending.len());
    }

    pub(crate) fn previous_title(&mut self) {
        Self::previous(&mut self.trending_state, self.trending.len());
    }

    /// How many trending titles fall into each known genre, in genre order.
    /// Genres with no titles are skipped.
    pub(crate) fn genre_counts(&self) -> Vec<(&Genre, usize)> {
        self.genres
            .iter()
            .filter_map(|genre| {
                let count = self
                    .trending
                    .iter()
                    .filter(|title| title.has_genre(genre.id))
                    .count();
                (count > 0).then_some((genre, count))
            })
            .collect()
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

    fn title(id: i64, genre_ids: Vec<i64>) -> Title {
        Title {
            id,
            kind: TitleKind::Movie,
            name: format!("Title {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 6.0,
            genre_ids,
        }
    }

    #[test]
    fn genre_counts_skip_empty_genres() {
        let mut feed = HomeFeed::new();
        feed.set_catalog(
            vec![title(1, vec![28]), title(2, vec![28, 878]), title(3, vec![878])],
            vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 878, name: "Science Fiction".to_string() },
                Genre { id: 35, name: "Comedy".to_string() },
            ],
        );

        let counts = feed.genre_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0.name, "Action");
        assert_eq!(counts[0].1, 2);
        assert_eq!(counts[1].1, 2);
    }

    #[test]
    fn trending_row_wraps_in_both_directions() {
        let mut feed = HomeFeed::new();
        feed.set_catalog(vec![title(1, vec![]), title(2, vec![])], vec![]);

        assert_eq!(feed.selected_title().unwrap().id, 1);
        feed.previous_title();
        assert_eq!(feed.selected_title().unwrap().id, 2);
        feed.next_title();
        assert_eq!(feed.selected_title().unwrap().id, 1);
    }
}
