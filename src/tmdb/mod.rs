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

//! TMDB catalog client.
//!
//! This module owns the request shape of the external movie metadata API:
//! endpoint paths, the API key parameter, and decoding of paged responses.
//! It is blocking by design — it is only ever called from background worker
//! threads, never from the UI thread.

mod model;

use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    config::AppConfig,
    model::{Genre, Title, TitleKind, WatchProvider},
    tmdb::model::{DetailPayload, GenreList, MovieRow, Page, ProvidersPayload, TvRow},
};

#[derive(thiserror::Error, Debug)]
pub(crate) enum TmdbError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),
}

/// The one capability the search dispatcher requires from the catalog.
///
/// Keeping this seam narrow lets the dispatcher run against a fake catalog
/// in tests, without the network.
pub(crate) trait TitleSearch: Send + 'static {
    fn search_titles(&self, query: &str) -> Result<Vec<Title>, TmdbError>;
}

#[derive(Clone)]
pub(crate) struct Tmdb {
    http: HttpClient,
    api_key: String,
    base_url: String,
    image_base_url: String,
    watch_region: String,
}

impl Tmdb {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            http: HttpClient::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.clone(),
            image_base_url: config.image_base_url.clone(),
            watch_region: config.watch_region.clone(),
        }
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()?;

        if !response.status().is_success() {
            return Err(TmdbError::Status(response.status()));
        }

        Ok(response.json()?)
    }

    /// Trending movies for the current week, in catalog order.
    pub(crate) fn trending_movies(&self) -> Result<Vec<Title>, TmdbError> {
        let page: Page<MovieRow> = self.get_json("/trending/movie/week", &[])?;
        Ok(page.results.into_iter().map(Title::from).collect())
    }

    pub(crate) fn movie_genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let list: GenreList = self.get_json("/genre/movie/list", &[])?;
        Ok(list.genres)
    }

    pub(crate) fn popular_tv(&self) -> Result<Vec<Title>, TmdbError> {
        self.tv_list("/tv/popular")
    }

    pub(crate) fn top_rated_tv(&self) -> Result<Vec<Title>, TmdbError> {
        self.tv_list("/tv/top_rated")
    }

    pub(crate) fn on_air_tv(&self) -> Result<Vec<Title>, TmdbError> {
        self.tv_list("/tv/on_the_air")
    }

    fn tv_list(&self, path: &str) -> Result<Vec<Title>, TmdbError> {
        let page: Page<TvRow> =
            self.get_json(path, &[("language", "en-US"), ("page", "1")])?;
        Ok(page.results.into_iter().map(Title::from).collect())
    }

    /// Detail payload for one title; the caller keeps the list-row `Title`
    /// and merges in the extra fields.
    pub(crate) fn title_detail(&self, title: &Title) -> Result<(Option<i64>, Vec<Genre>, String), TmdbError> {
        let path = match title.kind {
            TitleKind::Movie => format!("/movie/{}", title.id),
            TitleKind::Tv => format!("/tv/{}", title.id),
        };
        let detail: DetailPayload = self.get_json(&path, &[("language", "en-US")])?;

        Ok((detail.runtime_minutes(), detail.genres, detail.overview))
    }

    /// Flat-rate streaming offers for the configured watch region.
    pub(crate) fn watch_providers(&self, title: &Title) -> Result<Vec<WatchProvider>, TmdbError> {
        let path = match title.kind {
            TitleKind::Movie => format!("/movie/{}/watch/providers", title.id),
            TitleKind::Tv => format!("/tv/{}/watch/providers", title.id),
        };
        let payload: ProvidersPayload = self.get_json(&path, &[])?;

        Ok(payload.into_region(&self.watch_region))
    }

    /// Shows similar to the given one; the catalog only offers this for TV.
    pub(crate) fn similar_tv(&self, show_id: i64) -> Result<Vec<Title>, TmdbError> {
        let page: Page<TvRow> = self.get_json(
            &format!("/tv/{show_id}/similar"),
            &[("language", "en-US"), ("page", "1")],
        )?;
        Ok(page.results.into_iter().map(Title::from).collect())
    }

    /// Web URL of a poster or backdrop image, for display as a copyable link.
    pub(crate) fn image_url(&self, path: &str, size: &str) -> String {
        format!("{}/{}{}", self.image_base_url, size, path)
    }
}

impl TitleSearch for Tmdb {
    fn search_titles(&self, query: &str) -> Result<Vec<Title>, TmdbError> {
        let page: Page<MovieRow> = self.get_json(
            "/search/movie",
            &[("query", query), ("language", "en-US"), ("page", "1")],
        )?;

        Ok(page.results.into_iter().map(Title::from).collect())
    }
}
