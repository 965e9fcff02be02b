//! Catalog entities mirrored from the upstream API.
//!
//! Each struct deserializes the subset of upstream fields the portal
//! renders; unknown fields are ignored. Nothing here is persisted — every
//! value is rebuilt per request from upstream JSON.

use serde::{Deserialize, Serialize};

use crate::episode_code::EpisodeCode;

/// An episode as delivered by the upstream listing and detail endpoints.
///
/// The production code is kept in its raw `S<NN>E<NN>` form here; detail
/// views parse it into an [`EpisodeCode`] (see [`EpisodeDetail`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Upstream numeric identifier.
    pub id: u32,
    /// Episode title.
    pub name: String,
    /// Air date as an opaque upstream string (displayed verbatim).
    pub air_date: String,
    /// Raw production code, e.g. `"S01E01"`.
    pub episode: String,
    /// Ordered URLs of the characters appearing in the episode.
    pub characters: Vec<String>,
}

/// An episode detail record with the production code parsed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeDetail {
    /// Upstream numeric identifier.
    pub id: u32,
    /// Episode title.
    pub name: String,
    /// Air date as an opaque upstream string.
    pub air_date: String,
    /// Parsed season/episode numbers.
    pub code: EpisodeCode,
    /// Ordered URLs of the characters appearing in the episode.
    pub characters: Vec<String>,
}

/// A character from the upstream listing endpoint.
///
/// Only the identifier, name, and portrait survive deserialization; the
/// upstream's remaining fields (status, species, origin, ...) are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Upstream numeric identifier.
    pub id: u32,
    /// Character name.
    pub name: String,
    /// Portrait image URL.
    pub image: String,
}

/// The two character fields retained by the related-resource fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCard {
    /// Character name.
    pub name: String,
    /// Portrait image URL.
    pub image: String,
}

/// A location as delivered by the upstream listing and detail endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Upstream numeric identifier.
    pub id: u32,
    /// Location name.
    pub name: String,
    /// Location category (the upstream field is named `type`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Dimension the location belongs to.
    pub dimension: String,
    /// Ordered URLs of the characters residing at the location.
    pub residents: Vec<String>,
}
