//! Upstream catalog API client for the portal.
//!
//! This crate owns all traffic to the third-party catalog REST API:
//!
//! - **Listing fetches** (`GET {base}/{kind}?page=N&page_size=M`) returning
//!   one [`Page`](portal_types::Page) of records plus the total page count
//! - **Detail fetches** (`GET {base}/{kind}/{id}`) returning a single
//!   record; episode details also parse the `S<NN>E<NN>` production code
//! - **Related-resource fan-out**: a bounded, order-preserving concurrent
//!   fetch of character URLs where each failure degrades to `None` instead
//!   of aborting the batch
//!
//! The client is stateless apart from the underlying connection pool; no
//! caching, no retries, no cross-request coordination.

pub mod api;
pub mod config;
pub mod error;
pub mod related;

// Re-export primary types for convenience.
pub use api::{CatalogClient, ResourceKind};
pub use config::ClientConfig;
pub use error::ClientError;
