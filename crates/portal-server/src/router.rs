//! Axum router construction for the page server.
//!
//! Assembles all page routes into a single [`Router`] with request
//! tracing enabled.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the portal.
///
/// The router includes:
/// - `GET /` -- first page of the character listing
/// - `GET /episodes` -- paginated episode listing (`?page=N`)
/// - `GET /episode/{id}` -- single episode plus its characters
/// - `GET /locations` -- paginated location listing (`?page=N`)
/// - `GET /location/{id}` -- single location plus its residents
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/episodes", get(handlers::list_episodes))
        .route("/episode/{id}", get(handlers::get_episode))
        .route("/locations", get(handlers::list_locations))
        .route("/location/{id}", get(handlers::get_location))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
