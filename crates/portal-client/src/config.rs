//! Configuration for the upstream catalog client.
//!
//! All knobs are externally supplied (the server crate fills them from
//! environment variables); nothing is inlined at call sites.

use std::time::Duration;

/// Configuration for a [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API, without a trailing slash
    /// (e.g. `https://rickandmortyapi.com/api`).
    pub base_url: String,
    /// Page size forwarded to listing endpoints via `page_size`.
    pub page_size: u32,
    /// Maximum number of related-resource fetches in flight at once.
    pub related_concurrency: usize,
    /// Per-request timeout applied to every upstream call.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://rickandmortyapi.com/api"),
            page_size: 20,
            related_concurrency: 8,
            request_timeout: Duration::from_millis(10_000),
        }
    }
}
