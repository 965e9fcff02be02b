//! Bounded, order-preserving fan-out for related-resource fetches.
//!
//! Given the character URLs referenced by an episode (or the residents of
//! a location), fetch each one concurrently and keep only the name and
//! portrait. The batch is bounded by the configured concurrency limit and
//! results come back index-aligned with the input: result `i` always
//! corresponds to URL `i`.
//!
//! A failed fetch (transport error, timeout, non-200 status, malformed
//! body) degrades to a `None` entry and is logged; it never aborts the
//! batch and never surfaces as an error to the caller.

use futures::{stream, StreamExt};
use tracing::warn;

use portal_types::CharacterCard;

use crate::api::CatalogClient;

impl CatalogClient {
    /// Fetch the characters behind `urls` concurrently.
    ///
    /// At most `related_concurrency` requests are in flight at once. The
    /// returned vector has the same length as `urls`, with `None` marking
    /// each failed fetch. An empty input returns an empty vector without
    /// touching the network.
    pub async fn fetch_related(&self, urls: &[String]) -> Vec<Option<CharacterCard>> {
        // buffered() requires a non-zero window to make progress.
        let concurrency = self.config().related_concurrency.max(1);

        stream::iter(urls.iter().cloned())
            .map(|url| async move { self.fetch_card(&url).await })
            .buffered(concurrency)
            .collect()
            .await
    }

    /// Fetch one character card, degrading any failure to `None`.
    async fn fetch_card(&self, url: &str) -> Option<CharacterCard> {
        match self.get_json::<CharacterCard>(url).await {
            Ok(card) => Some(card),
            Err(e) => {
                warn!(url, error = %e, "related character fetch failed");
                None
            }
        }
    }
}
