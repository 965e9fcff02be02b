//! Page endpoint handlers.
//!
//! Every handler fetches from the upstream via the shared
//! [`CatalogClient`](portal_client::CatalogClient), optionally fans out
//! for related characters, and binds the result into a template. Detail
//! routes map upstream failures to 400, listings to 500 (see
//! [`PortalError`]).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | First page of the character listing |
//! | `GET` | `/episodes` | Paginated episode listing |
//! | `GET` | `/episode/{id}` | Single episode plus its characters |
//! | `GET` | `/locations` | Paginated location listing |
//! | `GET` | `/location/{id}` | Single location plus its residents |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::error::PortalError;
use crate::state::AppState;

/// Query parameters shared by the paginated listing endpoints.
///
/// Both `/episodes` and `/locations` take the same `page` parameter.
#[derive(Debug, serde::Deserialize)]
pub struct PageQuery {
    /// Requested page, 1-based. Defaults to the first page.
    pub page: Option<u32>,
}

impl PageQuery {
    /// The effective page number: missing or zero becomes page 1.
    fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Serve the landing page: the first page of the character listing at the
/// default page size, with no pagination controls.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, PortalError> {
    let characters = state
        .client
        .characters_first_page()
        .await
        .map_err(PortalError::Listing)?;

    let html = state.pages.render(
        "characters.html",
        serde_json::json!({ "characters": characters }),
    )?;

    Ok(Html(html))
}

/// Serve the paginated episode listing.
pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, PortalError> {
    let page = params.page();
    let episodes = state
        .client
        .episodes_page(page)
        .await
        .map_err(PortalError::Listing)?;

    let html = state.pages.render(
        "episodes.html",
        serde_json::json!({
            "episodes": episodes.items,
            "current_page": page,
            "total_pages": episodes.total_pages,
        }),
    )?;

    Ok(Html(html))
}

/// Serve one episode plus its referenced characters.
///
/// The character fan-out never fails the request: a character that could
/// not be fetched renders as a placeholder entry at its input position.
pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Html<String>, PortalError> {
    let episode = state
        .client
        .episode_by_id(id)
        .await
        .map_err(PortalError::Detail)?;

    let characters = state.client.fetch_related(&episode.characters).await;

    let html = state.pages.render(
        "episode.html",
        serde_json::json!({
            "episode": episode,
            "characters": characters,
        }),
    )?;

    Ok(Html(html))
}

/// Serve the paginated location listing.
pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, PortalError> {
    let page = params.page();
    let locations = state
        .client
        .locations_page(page)
        .await
        .map_err(PortalError::Listing)?;

    let html = state.pages.render(
        "locations.html",
        serde_json::json!({
            "locations": locations.items,
            "current_page": page,
            "total_pages": locations.total_pages,
        }),
    )?;

    Ok(Html(html))
}

/// Serve one location plus its residents.
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Html<String>, PortalError> {
    let location = state
        .client
        .location_by_id(id)
        .await
        .map_err(PortalError::Detail)?;

    let residents = state.client.fetch_related(&location.residents).await;

    let html = state.pages.render(
        "location.html",
        serde_json::json!({
            "location": location,
            "residents": residents,
        }),
    )?;

    Ok(Html(html))
}
