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

//! Input handling for the onboarding flow.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::onboarding::{OnboardingStep, OnboardingView};

#[derive(Debug)]
pub(crate) enum OnboardingAction {
    /// The user finished all steps with these answers.
    Complete {
        name: String,
        favourite_genres: Vec<String>,
    },
}

impl OnboardingView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<OnboardingAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match self.step {
            OnboardingStep::Welcome => {
                if key_event.code == KeyCode::Enter {
                    self.step = OnboardingStep::Name;
                }
                None
            }

            OnboardingStep::Name => match key_event.code {
                KeyCode::Enter => {
                    if !self.name_input.value().trim().is_empty() {
                        self.step = OnboardingStep::Genres;
                    }
                    None
                }
                _ => {
                    self.name_input.handle_event(event);
                    None
                }
            },

            OnboardingStep::Genres => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.next_genre();
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.previous_genre();
                    None
                }
                KeyCode::Char(' ') => {
                    self.toggle_current_genre();
                    None
                }
                KeyCode::Enter => Some(OnboardingAction::Complete {
                    name: self.name_input.value().trim().to_string(),
                    favourite_genres: self.chosen_genres(),
                }),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn flow_walks_welcome_name_genres() {
        let mut view = OnboardingView::new();
        assert_eq!(view.step, OnboardingStep::Welcome);

        view.process_event(&key(KeyCode::Enter));
        assert_eq!(view.step, OnboardingStep::Name);

        // A blank name does not advance.
        view.process_event(&key(KeyCode::Enter));
        assert_eq!(view.step, OnboardingStep::Name);

        for c in "Ada".chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
        view.process_event(&key(KeyCode::Enter));
        assert_eq!(view.step, OnboardingStep::Genres);

        view.process_event(&key(KeyCode::Char(' ')));
        let action = view.process_event(&key(KeyCode::Enter));

        match action {
            Some(OnboardingAction::Complete { name, favourite_genres }) => {
                assert_eq!(name, "Ada");
                assert_eq!(favourite_genres, vec!["Action"]);
            }
            None => panic!("expected completion"),
        }
    }
}
