//! The upstream catalog API client.
//!
//! One `reqwest` client with a per-request timeout, a configured base URL,
//! and two generic request shapes (listing and detail) instantiated per
//! resource kind. The upstream wraps listings in
//! `{ results, info: { pages } }`; detail endpoints return flat objects.

use serde::de::DeserializeOwned;

use portal_types::{
    Character, Episode, EpisodeCode, EpisodeDetail, ListEnvelope, Location, Page,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// The resource collections exposed by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// The `episode` collection.
    Episode,
    /// The `character` collection.
    Character,
    /// The `location` collection.
    Location,
}

impl ResourceKind {
    /// The upstream path segment for this collection.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Episode => "episode",
            Self::Character => "character",
            Self::Location => "location",
        }
    }
}

/// Client for the upstream catalog REST API.
///
/// Cheap to clone (the underlying `reqwest` client is an `Arc` over a
/// connection pool). Holds no request state of its own.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    /// Create a new client from configuration.
    ///
    /// The base URL is normalized to have no trailing slash so path
    /// construction stays uniform.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Construction`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(mut config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Construction(e.to_string()))?;

        config.base_url = config.base_url.trim_end_matches('/').to_owned();

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page of the episode listing.
    ///
    /// # Errors
    ///
    /// [`ClientError::UpstreamUnavailable`] on transport failure, timeout,
    /// or a non-success status; [`ClientError::MalformedResponse`] when the
    /// body does not match the list envelope.
    pub async fn episodes_page(&self, page: u32) -> Result<Page<Episode>, ClientError> {
        self.list(ResourceKind::Episode, page).await
    }

    /// Fetch one page of the location listing.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::episodes_page`].
    pub async fn locations_page(&self, page: u32) -> Result<Page<Location>, ClientError> {
        self.list(ResourceKind::Location, page).await
    }

    /// Fetch the first page of the character listing.
    ///
    /// The landing page shows only this fixed first page, so the
    /// pagination metadata is discarded.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::episodes_page`].
    pub async fn characters_first_page(&self) -> Result<Vec<Character>, ClientError> {
        self.list::<Character>(ResourceKind::Character, 1)
            .await
            .map(|page| page.items)
    }

    /// Fetch a single episode and parse its production code.
    ///
    /// # Errors
    ///
    /// [`ClientError::UpstreamUnavailable`] on transport failure or a
    /// non-success status (including 404 for a missing id);
    /// [`ClientError::MalformedResponse`] when the body is not an episode
    /// record or its production code fails shape validation.
    pub async fn episode_by_id(&self, id: u32) -> Result<EpisodeDetail, ClientError> {
        let record: Episode = self.detail(ResourceKind::Episode, id).await?;
        let code: EpisodeCode = record.episode.parse()?;

        Ok(EpisodeDetail {
            id: record.id,
            name: record.name,
            air_date: record.air_date,
            code,
            characters: record.characters,
        })
    }

    /// Fetch a single location.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::episode_by_id`], minus code parsing.
    pub async fn location_by_id(&self, id: u32) -> Result<Location, ClientError> {
        self.detail(ResourceKind::Location, id).await
    }

    /// Generic listing fetch: `GET {base}/{kind}?page=N&page_size=M`.
    async fn list<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        page: u32,
    ) -> Result<Page<T>, ClientError> {
        let url = format!("{}/{}", self.config.base_url, kind.path());

        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("page_size", self.config.page_size)])
            .send()
            .await
            .map_err(|e| {
                ClientError::UpstreamUnavailable(format!(
                    "{} listing request failed: {e}",
                    kind.path()
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UpstreamUnavailable(format!(
                "{} listing returned {status}",
                kind.path()
            )));
        }

        let envelope: ListEnvelope<T> = response.json().await.map_err(|e| {
            ClientError::MalformedResponse(format!("{} listing body: {e}", kind.path()))
        })?;

        Ok(Page::from(envelope))
    }

    /// Generic detail fetch: `GET {base}/{kind}/{id}`.
    async fn detail<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        id: u32,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}/{id}", self.config.base_url, kind.path());

        let response = self.http.get(&url).send().await.map_err(|e| {
            ClientError::UpstreamUnavailable(format!("{} {id} request failed: {e}", kind.path()))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UpstreamUnavailable(format!(
                "{} {id} returned {status}",
                kind.path()
            )));
        }

        response.json().await.map_err(|e| {
            ClientError::MalformedResponse(format!("{} {id} body: {e}", kind.path()))
        })
    }

    /// Issue a bare GET against an absolute URL (used by the fan-out).
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::UpstreamUnavailable(format!("{url}: {e}")))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::UpstreamUnavailable(format!(
                "{url} returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(format!("{url}: {e}")))
    }
}
