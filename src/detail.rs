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

//! Detail view state management.
//!
//! The view opens immediately with the list-row data it was navigated to
//! with, then fills in the full detail when the background fetch lands.
//! Fetches are tagged with the title id; a response for a title the user has
//! already navigated away from is dropped.

use crate::model::{Title, TitleDetail};

#[derive(Default)]
pub(crate) struct DetailView {
    pub(crate) title: Option<Title>,
    pub(crate) detail: Option<TitleDetail>,
    pub(crate) loading: bool,
}

impl DetailView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts showing the given title while its full detail loads.
    pub(crate) fn begin(&mut self, title: Title) {
        self.title = Some(title);
        self.detail = None;
        self.loading = true;
    }

    pub(crate) fn apply(&mut self, detail: TitleDetail) {
        if self.current_id() != Some(detail.title.id) {
            return;
        }
        self.detail = Some(detail);
        self.loading = false;
    }

    pub(crate) fn fail(&mut self, title_id: i64) {
        if self.current_id() == Some(title_id) {
            self.loading = false;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.title = None;
        self.detail = None;
        self.loading = false;
    }

    pub(crate) fn current_id(&self) -> Option<i64> {
        self.title.as_ref().map(|t| t.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TitleKind;

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

    fn detail(id: i64) -> TitleDetail {
        TitleDetail {
            title: title(id),
            runtime: Some(120),
            genres: vec![],
            providers: vec![],
            similar: vec![],
            poster_url: None,
        }
    }

    #[test]
    fn detail_for_superseded_title_is_dropped() {
        let mut view = DetailView::new();
        view.begin(title(1));
        view.begin(title(2));

        view.apply(detail(1));
        assert!(view.detail.is_none());
        assert!(view.loading);

        view.apply(detail(2));
        assert_eq!(view.detail.as_ref().unwrap().title.id, 2);
        assert!(!view.loading);
    }

    #[test]
    fn failure_clears_loading_only_for_current_title() {
        let mut view = DetailView::new();
        view.begin(title(2));

        view.fail(1);
        assert!(view.loading);
        view.fail(2);
        assert!(!view.loading);
    }
}
