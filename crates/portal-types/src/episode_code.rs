//! The `S<NN>E<NN>` episode production code and its parser.
//!
//! The upstream API delivers the code as a single string (`"S03E07"`).
//! Splitting it into season and episode parts is the only data transform
//! the client performs, and a code that does not match the expected shape
//! is a data-contract violation surfaced to the caller.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A parsed episode production code.
///
/// Season and episode are kept as digit strings so leading zeros survive
/// rendering: `"S03E07"` parses to season `"03"`, episode `"07"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeCode {
    /// Season number as it appears in the code (e.g. `"03"`).
    pub season: String,
    /// Episode number as it appears in the code (e.g. `"07"`).
    pub episode: String,
}

/// Errors produced when an episode code does not match the `S<NN>E<NN>` shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EpisodeCodeError {
    /// The code does not contain exactly one `E` separator.
    #[error("episode code {code:?} must contain exactly one 'E' separator")]
    Separator {
        /// The offending code string.
        code: String,
    },

    /// The season part is missing its `S` prefix or is not a digit string.
    #[error("episode code {code:?} has an invalid season part")]
    Season {
        /// The offending code string.
        code: String,
    },

    /// The episode part is empty or not a digit string.
    #[error("episode code {code:?} has an invalid episode part")]
    Episode {
        /// The offending code string.
        code: String,
    },
}

impl FromStr for EpisodeCode {
    type Err = EpisodeCodeError;

    /// Parse a production code, validating the full shape.
    ///
    /// The code must split on the literal `E` into exactly two parts; the
    /// first must be `S` followed by one or more ASCII digits, the second
    /// must be one or more ASCII digits.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let (prefix, episode) = code.split_once('E').ok_or_else(|| {
            EpisodeCodeError::Separator {
                code: code.to_owned(),
            }
        })?;

        // A second separator means the split would yield more than two parts.
        if episode.contains('E') {
            return Err(EpisodeCodeError::Separator {
                code: code.to_owned(),
            });
        }

        let season = prefix
            .strip_prefix('S')
            .ok_or_else(|| EpisodeCodeError::Season {
                code: code.to_owned(),
            })?;

        if !is_digits(season) {
            return Err(EpisodeCodeError::Season {
                code: code.to_owned(),
            });
        }

        if !is_digits(episode) {
            return Err(EpisodeCodeError::Episode {
                code: code.to_owned(),
            });
        }

        Ok(Self {
            season: season.to_owned(),
            episode: episode.to_owned(),
        })
    }
}

impl fmt::Display for EpisodeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}E{}", self.season, self.episode)
    }
}

/// True when `s` is one or more ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
