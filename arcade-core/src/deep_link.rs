//! Encoding and decoding of `?game=<slug>` deep links.
//!
//! The root path carries at most one meaningful query parameter. Anything else
//! in the query string is ignored.

use serde::{Deserialize, Serialize};

pub const GAME_PARAM: &str = "game";

/// Query payload pushed through the router when a game is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeepLinkQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
}

impl DeepLinkQuery {
    #[must_use]
    pub fn for_slug(slug: &str) -> Self {
        Self {
            game: Some(slug.to_string()),
        }
    }
}

/// Extract the `game` value from a raw query string (with or without the leading `?`).
///
/// The first `game` parameter wins. Empty or undecodable values yield `None`.
#[must_use]
pub fn slug_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == GAME_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(std::borrow::Cow::into_owned)
        .filter(|slug| !slug.is_empty())
}

/// Query string selecting `slug`, e.g. `?game=imposter`.
#[must_use]
pub fn game_query(slug: &str) -> String {
    format!("?{GAME_PARAM}={}", urlencoding::encode(slug))
}

/// Root-relative deep link, e.g. `/?game=imposter`.
#[must_use]
pub fn deep_link_path(slug: &str) -> String {
    format!("/{}", game_query(slug))
}

/// Absolute deep link used in structured data: `<origin>/?game=<slug>`.
#[must_use]
pub fn canonical_url(origin: &str, slug: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), deep_link_path(slug))
}

/// Absolute URL of the landing page.
#[must_use]
pub fn home_url(origin: &str) -> String {
    format!("{}/", origin.trim_end_matches('/'))
}
