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

//! User profile state and persistence.
//!
//! The profile is held as a plain record behind [`ProfileStore`], which
//! exposes typed read and update operations. Every update writes the whole
//! profile back to the durable store before returning; there is no batching,
//! so the on-disk copy is never more than one mutation behind the in-memory
//! one.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{model::Title, store::LocalStore};

pub(crate) const PROFILE_KEY: &str = "user_profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Quality {
    Auto,
    Low,
    Medium,
    High,
    #[serde(rename = "4k")]
    Uhd,
}

impl Quality {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Quality::Auto => "auto",
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
            Quality::Uhd => "4k",
        }
    }

    /// The next quality in the preference cycle.
    pub(crate) fn next(self) -> Self {
        match self {
            Quality::Auto => Quality::Low,
            Quality::Low => Quality::Medium,
            Quality::Medium => Quality::High,
            Quality::High => Quality::Uhd,
            Quality::Uhd => Quality::Auto,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserPreferences {
    pub(crate) notifications: bool,
    pub(crate) autoplay: bool,
    pub(crate) subtitles: bool,
    pub(crate) quality: Quality,
    pub(crate) language: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            autoplay: true,
            subtitles: false,
            quality: Quality::High,
            language: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct UserProfile {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) bio: String,
    pub(crate) onboarded: bool,
    pub(crate) favourite_genres: Vec<String>,
    #[serde(default)]
    pub(crate) preferences: UserPreferences,
    #[serde(default)]
    pub(crate) watchlist: Vec<Title>,
}

/// Handle over the user profile with write-through persistence.
pub(crate) struct ProfileStore {
    profile: UserProfile,
}

impl ProfileStore {
    /// Loads the profile from the durable store.
    ///
    /// A missing or malformed entry yields the default (not yet onboarded)
    /// profile rather than an error.
    pub(crate) fn load(store: &LocalStore) -> Self {
        let profile = store
            .get(PROFILE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self { profile }
    }

    pub(crate) fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub(crate) fn is_onboarded(&self) -> bool {
        self.profile.onboarded
    }

    /// Marks onboarding finished, recording the chosen identity and genres.
    pub(crate) fn complete_onboarding(
        &mut self,
        store: &LocalStore,
        name: String,
        favourite_genres: Vec<String>,
    ) -> Result<()> {
        self.profile.name = name;
        self.profile.favourite_genres = favourite_genres;
        self.profile.onboarded = true;
        self.persist(store)
    }

    pub(crate) fn toggle_notifications(&mut self, store: &LocalStore) -> Result<()> {
        self.profile.preferences.notifications = !self.profile.preferences.notifications;
        self.persist(store)
    }

    pub(crate) fn toggle_autoplay(&mut self, store: &LocalStore) -> Result<()> {
        self.profile.preferences.autoplay = !self.profile.preferences.autoplay;
        self.persist(store)
    }

    pub(crate) fn toggle_subtitles(&mut self, store: &LocalStore) -> Result<()> {
        self.profile.preferences.subtitles = !self.profile.preferences.subtitles;
        self.persist(store)
    }

    pub(crate) fn cycle_quality(&mut self, store: &LocalStore) -> Result<()> {
        self.profile.preferences.quality = self.profile.preferences.quality.next();
        self.persist(store)
    }

    pub(crate) fn is_in_watchlist(&self, title_id: i64) -> bool {
        self.profile.watchlist.iter().any(|t| t.id == title_id)
    }

    /// Adds the title to the watchlist, or removes it if already present.
    pub(crate) fn toggle_watchlist(&mut self, store: &LocalStore, title: &Title) -> Result<()> {
        if self.is_in_watchlist(title.id) {
            self.profile.watchlist.retain(|t| t.id != title.id);
        } else {
            self.profile.watchlist.push(title.clone());
        }
        self.persist(store)
    }

    pub(crate) fn remove_from_watchlist(&mut self, store: &LocalStore, title_id: i64) -> Result<()> {
        self.profile.watchlist.retain(|t| t.id != title_id);
        self.persist(store)
    }

    fn persist(&self, store: &LocalStore) -> Result<()> {
        let raw = serde_json::to_string(&self.profile)?;
        store.set(PROFILE_KEY, &raw)
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
            release_date: "2021-10-22".to_string(),
            vote_average: 7.9,
            genre_ids: vec![878],
        }
    }

    #[test]
    fn missing_profile_loads_default() {
        let store = LocalStore::open_in_memory().unwrap();
        let profiles = ProfileStore::load(&store);
        assert!(!profiles.is_onboarded());
        assert!(profiles.profile().watchlist.is_empty());
    }

    #[test]
    fn malformed_profile_loads_default() {
        let store = LocalStore::open_in_memory().unwrap();
        store.set(PROFILE_KEY, "{not valid json").unwrap();
        let profiles = ProfileStore::load(&store);
        assert!(!profiles.is_onboarded());
    }

    #[test]
    fn every_update_is_persisted_immediately() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut profiles = ProfileStore::load(&store);
        profiles
            .complete_onboarding(&store, "Ada".to_string(), vec!["Sci-Fi".to_string()])
            .unwrap();

        // A fresh handle over the same store sees the write.
        let reloaded = ProfileStore::load(&store);
        assert!(reloaded.is_onboarded());
        assert_eq!(reloaded.profile().name, "Ada");
        assert_eq!(reloaded.profile().favourite_genres, vec!["Sci-Fi"]);
    }

    #[test]
    fn watchlist_toggle_adds_and_removes() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut profiles = ProfileStore::load(&store);

        profiles.toggle_watchlist(&store, &title(603)).unwrap();
        assert!(profiles.is_in_watchlist(603));

        profiles.toggle_watchlist(&store, &title(603)).unwrap();
        assert!(!profiles.is_in_watchlist(603));

        let reloaded = ProfileStore::load(&store);
        assert!(reloaded.profile().watchlist.is_empty());
    }

    #[test]
    fn preference_toggles_round_trip() {
        let store = LocalStore::open_in_memory().unwrap();
        let mut profiles = ProfileStore::load(&store);

        profiles.toggle_subtitles(&store).unwrap();
        profiles.cycle_quality(&store).unwrap();

        let reloaded = ProfileStore::load(&store);
        assert!(reloaded.profile().preferences.subtitles);
        assert_eq!(reloaded.profile().preferences.quality, Quality::Uhd);
    }
}
