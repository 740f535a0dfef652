use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{
    errors::Error,
    pkg::{
        internal::{adaptors::jobs::spec::Job, filter::filter_jobs},
        server::{
            state::AppState,
            uispec::{Home, JobDetail, Listing},
        },
    },
    prelude::Result,
};

/// How many postings the landing page features.
pub const FEATURED_LIMIT: usize = 9;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>> {
    let jobs = load_jobs(&state).await;
    let query = params.q.unwrap_or_default();
    let matches = filter_jobs(&query, &jobs);

    let template = Home {
        query: &query,
        jobs: matches.into_iter().take(FEATURED_LIMIT).collect(),
    };
    Ok(Html(template.render()?))
}

pub async fn listing(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>> {
    let jobs = load_jobs(&state).await;
    let query = params.q.unwrap_or_default();

    let template = Listing {
        query: &query,
        jobs: filter_jobs(&query, &jobs),
    };
    Ok(Html(template.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let job = state
        .store
        .fetch_by_id(&id)
        .await?
        .ok_or_else(|| Error::JobNotFound(id.clone()))?;

    let template = JobDetail { job };
    Ok(Html(template.render()?))
}

/// One read of the whole collection per page view. A failed read degrades
/// to an empty list, so the page falls through to the "no jobs" placeholder
/// instead of an error surface.
async fn load_jobs(state: &AppState) -> Vec<Job> {
    match state.store.fetch_all().await {
        Ok(jobs) => jobs,
        Err(err) => {
            tracing::error!("error fetching jobs: {}", err);
            Vec::new()
        }
    }
}
