//! Page server entry point for the portal catalog browser.
//!
//! Initializes logging, loads configuration from environment variables,
//! builds the upstream client and page template engine, then serves HTML
//! pages until the process is terminated.
//!
//! ```text
//! browser --> router/handlers --> CatalogClient --> upstream API
//!                      |
//!                      +--> PageEngine (minijinja templates)
//! ```

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use portal_client::CatalogClient;
use portal_server::{start_server, AppState, PageEngine, PortalConfig, ServerConfig};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, template loading, client
/// construction, or the server itself fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("portal-server starting");

    // Load configuration from environment
    let config = PortalConfig::from_env()?;
    info!(
        upstream = config.upstream.base_url,
        page_size = config.upstream.page_size,
        related_concurrency = config.upstream.related_concurrency,
        request_timeout_ms = config.upstream.request_timeout.as_millis(),
        templates_dir = config.templates_dir,
        "configuration loaded"
    );

    // Build the upstream client
    let client = CatalogClient::new(config.upstream.clone())?;

    // Load page templates
    let pages = PageEngine::new(&config.templates_dir)?;
    info!(templates_dir = config.templates_dir, "page templates loaded");

    let state = Arc::new(AppState::new(client, pages));

    let server_config = ServerConfig {
        host: config.host.clone(),
        port: config.port,
    };

    start_server(&server_config, state).await?;

    Ok(())
}
