//! HTML page server for the portal catalog browser.
//!
//! This crate provides an Axum HTTP server that renders the upstream
//! catalog into server-side HTML pages:
//!
//! - **`GET /`** -- first page of the character listing
//! - **`GET /episodes`** -- paginated episode listing
//! - **`GET /episode/{id}`** -- one episode plus its characters
//! - **`GET /locations`** -- paginated location listing
//! - **`GET /location/{id}`** -- one location plus its residents
//!
//! # Architecture
//!
//! Every request is served straight from the upstream API via
//! [`portal_client::CatalogClient`] -- there is no persistence and no
//! cross-request state. Detail pages fan out one bounded concurrent fetch
//! per related character before rendering. Pages are rendered through a
//! [`minijinja`] environment loaded from a runtime templates directory so
//! the HTML can be restyled without recompiling.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::PortalConfig;
pub use error::PortalError;
pub use pages::PageEngine;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
