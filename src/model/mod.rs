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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application — catalog
//! titles, genres and watch providers — as they are used by the views,
//! independent of the wire format returned by the catalog API.

use serde::{Deserialize, Serialize};

/// What kind of catalog entry a [`Title`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum TitleKind {
    Movie,
    Tv,
}

/// A single catalog entry, movie or TV show.
///
/// Instances are immutable once fetched; the `id` is unique per catalog
/// entry within its kind. `release_date` is the raw `YYYY-MM-DD` string from
/// the catalog and may be empty for unreleased or sparsely-indexed titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Title {
    pub(crate) id: i64,
    pub(crate) kind: TitleKind,
    pub(crate) name: String,
    pub(crate) overview: String,
    pub(crate) poster_path: Option<String>,
    pub(crate) backdrop_path: Option<String>,
    pub(crate) release_date: String,
    pub(crate) vote_average: f64,
    pub(crate) genre_ids: Vec<i64>,
}

impl Title {
    pub(crate) fn has_genre(&self, genre_id: i64) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Genre {
    pub(crate) id: i64,
    pub(crate) name: String,
}

/// A streaming service offering a title in the configured watch region.
#[derive(Debug, Clone)]
pub(crate) struct WatchProvider {
    pub(crate) provider_id: i64,
    pub(crate) provider_name: String,
    pub(crate) logo_path: Option<String>,
    pub(crate) display_priority: i64,
}

/// Everything the detail view shows for one title.
///
/// Built by the task worker from up to three catalog calls; the provider and
/// similar-title lists degrade to empty on partial failure.
#[derive(Debug, Clone)]
pub(crate) struct TitleDetail {
    pub(crate) title: Title,
    pub(crate) runtime: Option<i64>,
    pub(crate) genres: Vec<Genre>,
    pub(crate) providers: Vec<WatchProvider>,
    pub(crate) similar: Vec<Title>,
    /// Full web URL of the poster image, shown as a copyable link.
    pub(crate) poster_url: Option<String>,
}
