//! The upstream list-response envelope and the per-page projection.
//!
//! Every upstream listing endpoint wraps its records in
//! `{ "results": [...], "info": { "pages": N, ... } }`. [`ListEnvelope`]
//! deserializes that shape; [`Page`] is what the client hands to callers
//! once the envelope has been unwrapped.

use serde::Deserialize;

/// Pagination metadata from the upstream `info` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    /// Total number of pages available for the listing.
    pub pages: u32,
}

/// The upstream list-response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListEnvelope<T> {
    /// Records on the requested page.
    pub results: Vec<T>,
    /// Pagination metadata.
    pub info: PageInfo,
}

/// One page of catalog records plus the total page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on the requested page, in upstream order.
    pub items: Vec<T>,
    /// Total number of pages available for the listing.
    pub total_pages: u32,
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        Self {
            items: envelope.results,
            total_pages: envelope.info.pages,
        }
    }
}
