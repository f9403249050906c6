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

//! TV shows browser state management.
//!
//! Three catalog sections (popular, top rated, currently airing) navigated
//! like panes, plus a featured carousel over the leading popular shows. The
//! carousel advances on its own while the view is idle and wraps at both
//! ends; the interval is a short demo value, not a tuned one.

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::Title;

pub(crate) const CAROUSEL_INTERVAL: Duration = Duration::from_secs(7);
const CAROUSEL_LEN: usize = 5;

#[derive(Default, Eq, PartialEq, Clone, Copy)]
pub(crate) enum ShowsPane {
    #[default]
    Popular,
    TopRated,
    OnAir,
}

pub(crate) struct ShowsBrowser {
    pub(crate) active_pane: ShowsPane,

    pub(crate) popular: Vec<Title>,
    pub(crate) top_rated: Vec<Title>,
    pub(crate) on_air: Vec<Title>,

    pub(crate) popular_state: ListState,
    pub(crate) top_rated_state: ListState,
    pub(crate) on_air_state: ListState,

    pub(crate) carousel_index: usize,
    carousel_advanced_at: Instant,

    pub(crate) loading: bool,
}

impl ShowsBrowser {
    pub(crate) fn new() -> Self {
        Self {
            active_pane: ShowsPane::default(),
            popular: Vec::new(),
            top_rated: Vec::new(),
            on_air: Vec::new(),
            popular_state: ListState::default(),
            top_rated_state: ListState::default(),
            on_air_state: ListState::default(),
            carousel_index: 0,
            carousel_advanced_at: Instant::now(),
            loading: true,
        }
    }

    pub(crate) fn set_shows(&mut self, popular: Vec<Title>, top_rated: Vec<Title>, on_air: Vec<Title>) {
        self.popular = popular;
        self.top_rated = top_rated;
        self.on_air = on_air;
        self.loading = false;
        self.carousel_index = 0;

        self.popular_state.select((!self.popular.is_empty()).then_some(0));
        self.top_rated_state.select((!self.top_rated.is_empty()).then_some(0));
        self.on_air_state.select((!self.on_air.is_empty()).then_some(0));
    }

    /// The shows cycled through by the carousel.
    pub(crate) fn featured(&self) -> &[Title] {
        &self.popular[..self.popular.len().min(CAROUSEL_LEN)]
    }

    pub(crate) fn carousel_show(&self) -> Option<&Title> {
        self.featured().get(self.carousel_index)
    }

    /// Advances the carousel if the rotation interval has elapsed.
    pub(crate) fn on_tick(&mut self, now: Instant) {
        if self.featured().is_empty() {
            return;
        }
        if now.duration_since(self.carousel_advanced_at) >= CAROUSEL_INTERVAL {
            self.carousel_index = (self.carousel_index + 1) % self.featured().len();
            self.carousel_advanced_at = now;
        }
    }

    /// Manual carousel step; restarts the auto-advance interval.
    pub(crate) fn carousel_next(&mut self, now: Instant) {
        let len = self.featured().len();
        if len == 0 {
            return;
        }
        self.carousel_index = (self.carousel_index + 1) % len;
        self.carousel_advanced_at = now;
    }

    pub(crate) fn carousel_previous(&mut self, now: Instant) {
        let len = self.featured().len();
        if len == 0 {
            return;
        }
        self.carousel_index = if self.carousel_index == 0 {
            len - 1
        } else {
            self.carousel_index - 1
        };
        self.carousel_advanced_at = now;
    }

    pub(crate) fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            ShowsPane::Popular => ShowsPane::TopRated,
            ShowsPane::TopRated => ShowsPane::OnAir,
            ShowsPane::OnAir => ShowsPane::Popular,
        };
    }

    pub(crate) fn previous_pane(&mut self) {
        self.active_pane = match self.active_pane {
            ShowsPane::Popular => ShowsPane::OnAir,
            ShowsPane::TopRated => ShowsPane::Popular,
            ShowsPane::OnAir => ShowsPane::TopRated,
        };
    }

    pub(crate) fn next_row(&mut self) {
        let (state, len) = self.active_list();
        Self::next(state, len);
    }

    pub(crate) fn previous_row(&mut self) {
        let (state, len) = self.active_list();
        Self::previous(state, len);
    }

    pub(crate) fn selected_title(&self) -> Option<&Title> {
        let (shows, state) = match self.active_pane {
            ShowsPane::Popular => (&self.popular, &self.popular_state),
            ShowsPane::TopRated => (&self.top_rated, &self.top_rated_state),
            ShowsPane::OnAir => (&self.on_air, &self.on_air_state),
        };
        shows.get(state.selected()?)
    }

    fn active_list(&mut self) -> (&mut ListState, usize) {
        match self.active_pane {
            ShowsPane::Popular => (&mut self.popular_state, self.popular.len()),
            ShowsPane::TopRated => (&mut self.top_rated_state, self.top_rated.len()),
            ShowsPane::OnAir => (&mut self.on_air_state, self.on_air.len()),
        }
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

    fn show(id: i64) -> Title {
        Title {
            id,
            kind: TitleKind::Tv,
            name: format!("Show {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 8.0,
            genre_ids: vec![],
        }
    }

    fn browser_with(n: i64) -> ShowsBrowser {
        let mut browser = ShowsBrowser::new();
        browser.set_shows((1..=n).map(show).collect(), vec![], vec![]);
        browser
    }

    #[test]
    fn featured_is_capped_at_carousel_length() {
        let browser = browser_with(8);
        assert_eq!(browser.featured().len(), 5);
    }

    #[test]
    fn carousel_advances_only_after_the_interval() {
        let mut browser = browser_with(3);
        let start = Instant::now();

        browser.on_tick(start + Duration::from_secs(1));
        assert_eq!(browser.carousel_index, 0);

        browser.on_tick(start + CAROUSEL_INTERVAL + Duration::from_secs(1));
        assert_eq!(browser.carousel_index, 1);
    }

    #[test]
    fn carousel_wraps_in_both_directions() {
        let mut browser = browser_with(3);
        let now = Instant::now();

        browser.carousel_previous(now);
        assert_eq!(browser.carousel_index, 2);
        browser.carousel_next(now);
        assert_eq!(browser.carousel_index, 0);
    }

    #[test]
    fn manual_step_restarts_the_auto_interval() {
        let mut browser = browser_with(3);
        let start = Instant::now();

        browser.carousel_next(start + Duration::from_secs(5));
        assert_eq!(browser.carousel_index, 1);

        // Five seconds of auto-advance credit were discarded by the manual step.
        browser.on_tick(start + Duration::from_secs(8));
        assert_eq!(browser.carousel_index, 1);
    }

    #[test]
    fn empty_sections_leave_carousel_dormant() {
        let mut browser = ShowsBrowser::new();
        browser.set_shows(vec![], vec![], vec![]);

        browser.on_tick(Instant::now() + CAROUSEL_INTERVAL * 2);
        assert_eq!(browser.carousel_index, 0);
        assert!(browser.carousel_show().is_none());
    }
}
