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

//! Profile page view state.
//!
//! The profile data itself lives in [`crate::profile::ProfileStore`]; this
//! component only tracks the watchlist selection for the page.

mod event;
mod render;

pub(crate) use event::ProfileAction;

use ratatui::widgets::ListState;

pub(crate) struct ProfileView {
    pub(crate) watchlist_state: ListState,
}

impl ProfileView {
    pub(crate) fn new() -> Self {
        Self {
            watchlist_state: ListState::default(),
        }
    }

    pub(crate) fn next_row(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.watchlist_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.watchlist_state.select(Some(i));
    }

    pub(crate) fn previous_row(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.watchlist_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.watchlist_state.select(Some(i));
    }

    /// Keeps the selection valid after a removal shrank the list.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.watchlist_state.select(None);
        } else if let Some(i) = self.watchlist_state.selected() {
            if i >= len {
                self.watchlist_state.select(Some(len - 1));
            }
        }
    }
}
