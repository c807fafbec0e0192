use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static SLUG_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").ok());

/// A single externally hosted game listed by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    /// URL-safe identifier used in `?game=<slug>` deep links.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Address of the hosted game. Loaded as-is, never inspected.
    pub url: String,
    /// Older catalogs called this `thumbnail`.
    #[serde(default, alias = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// Markup fragment shown off-screen for crawlers and screen readers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_content: Option<String>,
}

impl Game {
    /// Title used for the browser tab while the game is open.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate game id `{0}`")]
    DuplicateId(String),
    #[error("duplicate game slug `{0}`")]
    DuplicateSlug(String),
    #[error("game `{0}` has an empty slug")]
    EmptySlug(String),
    #[error("game `{id}` has slug `{slug}` which is not URL-safe")]
    InvalidSlug { id: String, slug: String },
    #[error("game `{0}` has an empty url")]
    EmptyUrl(String),
}

/// Ordered, immutable list of games plus the landing page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Catalog {
    /// Catalog with no games (renders the empty-state placeholder).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_games(games: Vec<Game>) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    /// Parse and validate catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any record breaks the
    /// catalog invariants (see [`Catalog::validate`]).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that ids and slugs are unique, slugs are URL-safe and every game has a url.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for game in &self.games {
            if !ids.insert(game.id.as_str()) {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
            if game.slug.is_empty() {
                return Err(CatalogError::EmptySlug(game.id.clone()));
            }
            if !is_url_safe_slug(&game.slug) {
                return Err(CatalogError::InvalidSlug {
                    id: game.id.clone(),
                    slug: game.slug.clone(),
                });
            }
            if !slugs.insert(game.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(game.slug.clone()));
            }
            if game.url.trim().is_empty() {
                return Err(CatalogError::EmptyUrl(game.id.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.slug == slug)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }
}

#[must_use]
pub fn is_url_safe_slug(slug: &str) -> bool {
    SLUG_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(slug))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Catalog, Game};

    pub fn game(id: &str, slug: &str) -> Game {
        Game {
            id: id.to_string(),
            slug: slug.to_string(),
            title: format!("{slug} title"),
            description: format!("{slug} description"),
            category: String::from("Fun"),
            url: format!("https://{slug}.example.com"),
            image: None,
            seo_title: None,
            seo_description: None,
            seo_content: None,
        }
    }

    pub fn seo_game(id: &str, slug: &str) -> Game {
        Game {
            image: Some(format!("https://img.example.com/{slug}.png")),
            seo_title: Some(format!("Play {slug} online")),
            seo_description: Some(format!("{slug} in your browser")),
            seo_content: Some(format!("<h1>{slug}</h1>")),
            ..game(id, slug)
        }
    }

    pub fn two_games() -> Catalog {
        Catalog {
            title: String::from("THE PLAYGROUND"),
            subtitle: String::from("Personal experiments"),
            games: vec![seo_game("game-1", "dual-n-back"), game("game-2", "imposter")],
        }
    }
}
