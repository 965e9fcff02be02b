//! Shared application state for the page server.
//!
//! [`AppState`] holds the upstream client and the page template engine.
//! Both are request-independent: the client is a connection pool and the
//! engine is immutable after startup, so no locking is needed and no
//! state is shared between concurrent requests.

use portal_client::CatalogClient;

use crate::pages::PageEngine;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
pub struct AppState {
    /// Client for the upstream catalog API.
    pub client: CatalogClient,
    /// Pre-loaded page templates.
    pub pages: PageEngine,
}

impl AppState {
    /// Create a new application state from its two components.
    pub const fn new(client: CatalogClient, pages: PageEngine) -> Self {
        Self { client, pages }
    }
}
