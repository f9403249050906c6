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

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::{Title, TitleDetail, TitleKind},
    tasks::TaskContext,
};

pub(super) fn fetch_catalog(ctx: &TaskContext) -> Result<()> {
    let titles = ctx.tmdb.trending_movies()?;
    let genres = ctx.tmdb.movie_genres()?;

    tracing::info!(titles = titles.len(), genres = genres.len(), "catalog fetched");
    ctx.event_tx.send(AppEvent::CatalogReady { titles, genres })?;

    Ok(())
}

pub(super) fn fetch_shows(ctx: &TaskContext) -> Result<()> {
    let popular = ctx.tmdb.popular_tv()?;
    let top_rated = ctx.tmdb.top_rated_tv()?;
    let on_air = ctx.tmdb.on_air_tv()?;

    tracing::info!(
        popular = popular.len(),
        top_rated = top_rated.len(),
        on_air = on_air.len(),
        "tv sections fetched"
    );
    ctx.event_tx.send(AppEvent::ShowsReady {
        popular,
        top_rated,
        on_air,
    })?;

    Ok(())
}

/// Assembles the full detail for one title.
///
/// The base detail call is required; provider and similar lookups degrade to
/// empty lists so a partial outage still renders a useful page.
pub(super) fn fetch_detail(ctx: &TaskContext, title: Title) -> Result<()> {
    let (runtime, genres, overview) = match ctx.tmdb.title_detail(&title) {
        Ok(detail) => detail,
        Err(e) => {
            tracing::warn!(title_id = title.id, error = %e, "detail fetch failed");
            ctx.event_tx.send(AppEvent::DetailFailed { title_id: title.id })?;
            return Ok(());
        }
    };

    let mut providers = ctx.tmdb.watch_providers(&title).unwrap_or_else(|e| {
        tracing::warn!(title_id = title.id, error = %e, "provider fetch failed");
        Vec::new()
    });
    // The catalog occasionally repeats a provider across offer tiers.
    providers.sort_by_key(|p| p.display_priority);
    providers.dedup_by_key(|p| p.provider_id);

    let similar = match title.kind {
        TitleKind::Tv => ctx.tmdb.similar_tv(title.id).unwrap_or_else(|e| {
            tracing::warn!(title_id = title.id, error = %e, "similar fetch failed");
            Vec::new()
        }),
        TitleKind::Movie => Vec::new(),
    };

    let poster_url = title
        .poster_path
        .as_deref()
        .map(|path| ctx.tmdb.image_url(path, "w500"));

    // Detail responses carry a fuller overview than list rows.
    let mut title = title;
    if !overview.is_empty() {
        title.overview = overview;
    }

    ctx.event_tx.send(AppEvent::DetailReady(Box::new(TitleDetail {
        title,
        runtime,
        genres,
        providers,
        similar,
        poster_url,
    })))?;

    Ok(())
}
