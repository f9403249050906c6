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

//! Input handling for the profile page.
//!
//! Preference toggles write through the profile store immediately;
//! watchlist rows can be removed or opened in the detail view.

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::profile::ProfileView, model::Title, profile::ProfileStore, store::LocalStore,
};

#[derive(Debug)]
pub(crate) enum ProfileAction {
    /// Open the detail view for this watchlist entry.
    OpenTitle(Title),
}

impl ProfileView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        profiles: &mut ProfileStore,
        store: &LocalStore,
    ) -> Result<Option<ProfileAction>> {
        let Event::Key(key_event) = event else {
            return Ok(None);
        };

        let watchlist_len = profiles.profile().watchlist.len();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next_row(watchlist_len),
            KeyCode::Char('k') | KeyCode::Up => self.previous_row(watchlist_len),

            KeyCode::Char('x') => {
                if let Some(index) = self.watchlist_state.selected() {
                    if let Some(title) = profiles.profile().watchlist.get(index) {
                        let title_id = title.id;
                        profiles.remove_from_watchlist(store, title_id)?;
                        self.clamp_selection(profiles.profile().watchlist.len());
                    }
                }
            }

            KeyCode::Enter => {
                if let Some(index) = self.watchlist_state.selected() {
                    if let Some(title) = profiles.profile().watchlist.get(index) {
                        return Ok(Some(ProfileAction::OpenTitle(title.clone())));
                    }
                }
            }

            KeyCode::Char('n') => profiles.toggle_notifications(store)?,
            KeyCode::Char('a') => profiles.toggle_autoplay(store)?,
            KeyCode::Char('s') => profiles.toggle_subtitles(store)?,
            KeyCode::Char('c') => profiles.cycle_quality(store)?,

            _ => {}
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TitleKind;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn title(id: i64) -> Title {
        Title {
            id,
            kind: TitleKind::Movie,
            name: format!("Title {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 7.0,
            genre_ids: vec![],
        }
    }

    #[test]
    fn removing_last_row_clamps_selection() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut profiles = ProfileStore::load(&store);
        profiles.toggle_watchlist(&store, &title(1)).unwrap();
        profiles.toggle_watchlist(&store, &title(2)).unwrap();

        let mut view = ProfileView::new();
        view.next_row(2);
        view.next_row(2);
        assert_eq!(view.watchlist_state.selected(), Some(1));

        view.process_event(&key(KeyCode::Char('x')), &mut profiles, &store)
            .unwrap();
        assert_eq!(profiles.profile().watchlist.len(), 1);
        assert_eq!(view.watchlist_state.selected(), Some(0));
    }

    #[test]
    fn enter_opens_selected_watchlist_title() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut profiles = ProfileStore::load(&store);
        profiles.toggle_watchlist(&store, &title(7)).unwrap();

        let mut view = ProfileView::new();
        view.next_row(1);

        let action = view
            .process_event(&key(KeyCode::Enter), &mut profiles, &store)
            .unwrap();
        match action {
            Some(ProfileAction::OpenTitle(t)) => assert_eq!(t.id, 7),
            None => panic!("expected an open action"),
        }
    }
}
