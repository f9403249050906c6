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

//! Input handling for the search overlay.
//!
//! This module maps raw terminal keyboard events onto overlay transitions.
//! Anything not claimed by the navigator keys is delegated to the managed
//! text input; an edit that actually changes the query value is reported
//! back to the caller as a dispatch or cancel action.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::search::{SearchOverlay, SearchPhase},
    model::Title,
    store::LocalStore,
};

/// What the events layer must do after a key was processed.
#[derive(Debug)]
pub(crate) enum SearchAction {
    /// Forward the new query value to the debounced dispatcher.
    QueryChanged(String),
    /// Drop any pending dispatch; the query fell below searchable length.
    CancelPending,
    /// The user committed this title; navigate to it and close the overlay.
    Select(Title),
    /// Close the overlay without selecting anything.
    Close,
}

impl SearchOverlay {
    pub(crate) fn process_event(&mut self, event: &Event, store: &LocalStore) -> Option<SearchAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc => Some(SearchAction::Close),

            KeyCode::Enter => {
                if self.phase() == SearchPhase::Recent {
                    let term = self.selected_recent_term()?;
                    self.set_query(&term);
                    Some(self.query_edited())
                } else {
                    let title = self.commit(store)?;
                    Some(SearchAction::Select(title))
                }
            }

            KeyCode::Down => {
                if self.phase() == SearchPhase::Recent {
                    self.recent_down();
                } else {
                    self.cursor_down();
                }
                None
            }

            KeyCode::Up => {
                if self.phase() == SearchPhase::Recent {
                    self.recent_up();
                } else {
                    self.cursor_up();
                }
                None
            }

            // Destructive and immediate, matching the "Clear all" affordance.
            KeyCode::Delete if self.phase() == SearchPhase::Recent => {
                self.recent.clear(store);
                self.recent_state.select(None);
                None
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);
                if self.input.value() != before {
                    Some(self.query_edited())
                } else {
                    None
                }
            }
        }
    }
}
