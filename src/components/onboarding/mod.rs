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

//! First-run onboarding flow.
//!
//! Three steps: a welcome screen, a name prompt, and a favourite-genre
//! multi-select. Completion hands the collected answers to the profile
//! store and drops the user into the home view.

mod event;
mod render;

pub(crate) use event::OnboardingAction;

use std::collections::HashSet;

use ratatui::widgets::ListState;
use tui_input::Input;

/// Genre choices offered during onboarding. Free-form labels, not catalog
/// genre ids; they only personalize the profile page.
pub(crate) const ONBOARDING_GENRES: [&str; 10] = [
    "Action", "Adventure", "Comedy", "Drama", "Fantasy",
    "Horror", "Mystery", "Romance", "Sci-Fi", "Thriller",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnboardingStep {
    Welcome,
    Name,
    Genres,
}

pub(crate) struct OnboardingView {
    pub(crate) step: OnboardingStep,
    pub(crate) name_input: Input,
    pub(crate) picked: HashSet<usize>,
    pub(crate) genre_state: ListState,
}

impl OnboardingView {
    pub(crate) fn new() -> Self {
        let mut genre_state = ListState::default();
        genre_state.select(Some(0));

        Self {
            step: OnboardingStep::Welcome,
            name_input: Input::default(),
            picked: HashSet::new(),
            genre_state,
        }
    }

    pub(crate) fn toggle_current_genre(&mut self) {
        if let Some(index) = self.genre_state.selected() {
            if !self.picked.insert(index) {
                self.picked.remove(&index);
            }
        }
    }

    pub(crate) fn chosen_genres(&self) -> Vec<String> {
        ONBOARDING_GENRES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.picked.contains(i))
            .map(|(_, g)| g.to_string())
            .collect()
    }

    pub(crate) fn next_genre(&mut self) {
        let len = ONBOARDING_GENRES.len();
        let i = match self.genre_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.genre_state.select(Some(i));
    }

    pub(crate) fn previous_genre(&mut self) {
        let len = ONBOARDING_GENRES.len();
        let i = match self.genre_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.genre_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_toggle_flips_membership() {
        let mut view = OnboardingView::new();

        view.toggle_current_genre();
        assert_eq!(view.chosen_genres(), vec!["Action"]);

        view.toggle_current_genre();
        assert!(view.chosen_genres().is_empty());
    }

    #[test]
    fn chosen_genres_preserve_list_order() {
        let mut view = OnboardingView::new();
        view.next_genre();
        view.next_genre();
        view.toggle_current_genre(); // Comedy
        view.previous_genre();
        view.previous_genre();
        view.toggle_current_genre(); // Action

        assert_eq!(view.chosen_genres(), vec!["Action", "Comedy"]);
    }
}
