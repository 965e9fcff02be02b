//! Configuration for the page server.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults, so every operational knob (upstream URL, page size, fan-out
//! width, timeouts, bind address, templates directory) is externally
//! supplied rather than inlined at call sites.

use std::time::Duration;

use portal_client::ClientConfig;

use crate::error::PortalError;

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Upstream catalog client configuration.
    pub upstream: ClientConfig,
    /// Path to the page templates directory.
    pub templates_dir: String,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `PORTAL_HOST` -- bind address (default `0.0.0.0`)
    /// - `PORTAL_PORT` -- bind port (default `8080`)
    /// - `UPSTREAM_API_URL` -- upstream base URL
    ///   (default `https://rickandmortyapi.com/api`)
    /// - `LISTING_PAGE_SIZE` -- page size forwarded to listings (default `20`)
    /// - `RELATED_CONCURRENCY` -- max concurrent related fetches (default `8`)
    /// - `REQUEST_TIMEOUT_MS` -- per-request upstream timeout (default `10000`)
    /// - `TEMPLATES_DIR` -- page templates directory (default `templates`)
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Config`] when a numeric variable is set to a
    /// value that does not parse.
    pub fn from_env() -> Result<Self, PortalError> {
        let host = env_or("PORTAL_HOST", "0.0.0.0");
        let port: u16 = env_parse("PORTAL_PORT", "8080")?;

        let base_url = env_or("UPSTREAM_API_URL", "https://rickandmortyapi.com/api");
        let page_size: u32 = env_parse("LISTING_PAGE_SIZE", "20")?;
        let related_concurrency: usize = env_parse("RELATED_CONCURRENCY", "8")?;
        let request_timeout_ms: u64 = env_parse("REQUEST_TIMEOUT_MS", "10000")?;

        let templates_dir = env_or("TEMPLATES_DIR", "templates");

        Ok(Self {
            host,
            port,
            upstream: ClientConfig {
                base_url,
                page_size,
                related_concurrency,
                request_timeout: Duration::from_millis(request_timeout_ms),
            },
            templates_dir,
        })
    }
}

/// Read an environment variable, falling back to a default.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Read and parse an environment variable, falling back to a default.
fn env_parse<T>(name: &str, default: &str) -> Result<T, PortalError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(name, default)
        .parse()
        .map_err(|e| PortalError::Config(format!("invalid {name}: {e}")))
}
