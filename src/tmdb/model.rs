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

//! Wire format of the catalog API.
//!
//! This module provides the conversion logic between raw catalog API
//! responses and the domain models, ensuring missing optional fields
//! deserialize to sensible defaults instead of failing whole pages.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::{Genre, Title, TitleKind, WatchProvider};

/// Standard paged list envelope used by every catalog list endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub(super) results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MovieRow {
    pub(super) id: i64,
    pub(super) title: String,
    #[serde(default)]
    pub(super) overview: String,
    #[serde(default)]
    pub(super) poster_path: Option<String>,
    #[serde(default)]
    pub(super) backdrop_path: Option<String>,
    #[serde(default)]
    pub(super) release_date: String,
    #[serde(default)]
    pub(super) vote_average: f64,
    #[serde(default)]
    pub(super) genre_ids: Vec<i64>,
}

impl From<MovieRow> for Title {
    fn from(row: MovieRow) -> Self {
        Title {
            id: row.id,
            kind: TitleKind::Movie,
            name: row.title,
            overview: row.overview,
            poster_path: row.poster_path,
            backdrop_path: row.backdrop_path,
            release_date: row.release_date,
            vote_average: row.vote_average,
            genre_ids: row.genre_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TvRow {
    pub(super) id: i64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) overview: String,
    #[serde(default)]
    pub(super) poster_path: Option<String>,
    #[serde(default)]
    pub(super) backdrop_path: Option<String>,
    #[serde(default)]
    pub(super) first_air_date: String,
    #[serde(default)]
    pub(super) vote_average: f64,
    #[serde(default)]
    pub(super) genre_ids: Vec<i64>,
}

impl From<TvRow> for Title {
    fn from(row: TvRow) -> Self {
        Title {
            id: row.id,
            kind: TitleKind::Tv,
            name: row.name,
            overview: row.overview,
            poster_path: row.poster_path,
            backdrop_path: row.backdrop_path,
            release_date: row.first_air_date,
            vote_average: row.vote_average,
            genre_ids: row.genre_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GenreList {
    pub(super) genres: Vec<Genre>,
}

/// Detail payload shared by the movie and TV detail endpoints.
///
/// Detail responses carry resolved `genres` instead of the `genre_ids` of the
/// list endpoints; `runtime` is only present for movies and
/// `episode_run_time` only for TV shows.
#[derive(Debug, Deserialize)]
pub(super) struct DetailPayload {
    #[serde(default)]
    pub(super) overview: String,
    #[serde(default)]
    pub(super) runtime: Option<i64>,
    #[serde(default)]
    pub(super) episode_run_time: Vec<i64>,
    #[serde(default)]
    pub(super) genres: Vec<Genre>,
}

impl DetailPayload {
    pub(super) fn runtime_minutes(&self) -> Option<i64> {
        self.runtime.or_else(|| self.episode_run_time.first().copied())
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ProvidersPayload {
    #[serde(default)]
    pub(super) results: HashMap<String, RegionOffers>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RegionOffers {
    #[serde(default)]
    pub(super) flatrate: Vec<ProviderRow>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProviderRow {
    pub(super) provider_id: i64,
    pub(super) provider_name: String,
    #[serde(default)]
    pub(super) logo_path: Option<String>,
    #[serde(default)]
    pub(super) display_priority: i64,
}

impl ProvidersPayload {
    /// Flat-rate offers for the given region, empty when the catalog has
    /// none for that region.
    pub(super) fn into_region(mut self, region: &str) -> Vec<WatchProvider> {
        self.results
            .remove(region)
            .unwrap_or_default()
            .flatrate
            .into_iter()
            .map(|row| WatchProvider {
                provider_id: row.provider_id,
                provider_name: row.provider_name,
                logo_path: row.logo_path,
                display_priority: row.display_priority,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_page_deserializes_with_missing_optionals() {
        let raw = r#"{
            "page": 1,
            "results": [
                {"id": 438631, "title": "Dune", "release_date": "2021-10-22",
                 "vote_average": 7.8, "genre_ids": [878, 12],
                 "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"},
                {"id": 693134, "title": "Dune: Part Two", "poster_path": null}
            ],
            "total_pages": 1
        }"#;

        let page: Page<MovieRow> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.results.len(), 2);

        let first = Title::from(page.results.into_iter().next().unwrap());
        assert_eq!(first.id, 438631);
        assert_eq!(first.kind, TitleKind::Movie);
        assert_eq!(first.name, "Dune");
        assert!(first.has_genre(878));
    }

    #[test]
    fn tv_rows_map_air_date_to_release_date() {
        let raw = r#"{"id": 1399, "name": "Game of Thrones",
                      "first_air_date": "2011-04-17", "vote_average": 8.4}"#;
        let row: TvRow = serde_json::from_str(raw).unwrap();
        let title = Title::from(row);
        assert_eq!(title.kind, TitleKind::Tv);
        assert_eq!(title.release_date, "2011-04-17");
        assert!(title.genre_ids.is_empty());
    }

    #[test]
    fn detail_runtime_falls_back_to_episode_run_time() {
        let movie: DetailPayload =
            serde_json::from_str(r#"{"runtime": 155, "genres": []}"#).unwrap();
        assert_eq!(movie.runtime_minutes(), Some(155));

        let show: DetailPayload =
            serde_json::from_str(r#"{"episode_run_time": [57, 60], "genres": []}"#).unwrap();
        assert_eq!(show.runtime_minutes(), Some(57));

        let bare: DetailPayload = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(bare.runtime_minutes(), None);
    }

    #[test]
    fn providers_missing_region_yields_empty() {
        let raw = r#"{"results": {
            "US": {"flatrate": [
                {"provider_id": 8, "provider_name": "Netflix",
                 "logo_path": "/n.png", "display_priority": 1}
            ]}
        }}"#;

        let payload: ProvidersPayload = serde_json::from_str(raw).unwrap();
        assert!(payload.into_region("SE").is_empty());

        let payload: ProvidersPayload = serde_json::from_str(raw).unwrap();
        let us = payload.into_region("US");
        assert_eq!(us.len(), 1);
        assert_eq!(us[0].provider_name, "Netflix");
    }
}
