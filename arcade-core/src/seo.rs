//! Ownership hand-off for the page-level metadata.
//!
//! The document title, description tag, structured-data element and the
//! off-screen crawler content form a single shared resource. Only this module
//! writes to it: the player holds a [`SeoLease`] while a game is open and the
//! menu republishes the catalog listing with [`publish_catalog`].

use crate::catalog::{Catalog, Game};
use crate::structured_data::{catalog_structured_data, game_structured_data};
use serde_json::Value;

/// Access to the page metadata singleton.
pub trait MetadataPort {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
    /// Content of the description meta tag, empty when absent.
    fn description(&self) -> String;
    fn set_description(&mut self, description: &str);
    fn set_structured_data(&mut self, document: &Value);
    /// Show (`Some`) or remove (`None`) the visually hidden crawler markup.
    fn set_hidden_content(&mut self, markup: Option<&str>);
}

/// Per-game override of the page metadata, restored on [`SeoLease::release`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a lease must be released to restore the page metadata"]
pub struct SeoLease {
    game_id: String,
    previous_title: String,
    previous_description: String,
}

impl SeoLease {
    /// Capture the current title/description and apply `game`'s metadata.
    ///
    /// Optional SEO fields that are absent leave the corresponding value untouched.
    pub fn acquire<P: MetadataPort + ?Sized>(port: &mut P, game: &Game, origin: &str) -> Self {
        let lease = Self {
            game_id: game.id.clone(),
            previous_title: port.title(),
            previous_description: port.description(),
        };

        if let Some(title) = &game.seo_title {
            port.set_title(title);
        }
        if let Some(description) = &game.seo_description {
            port.set_description(description);
        }
        port.set_structured_data(&game_structured_data(game, origin));
        port.set_hidden_content(game.seo_content.as_deref());

        log::debug!("seo lease acquired for `{}`", lease.game_id);
        lease
    }

    /// Restore the captured title and description and drop the crawler markup.
    ///
    /// The structured data is left for the next owner to overwrite.
    pub fn release<P: MetadataPort + ?Sized>(self, port: &mut P) {
        port.set_title(&self.previous_title);
        port.set_description(&self.previous_description);
        port.set_hidden_content(None);
        log::debug!("seo lease released for `{}`", self.game_id);
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    #[must_use]
    pub fn previous_title(&self) -> &str {
        &self.previous_title
    }
}

/// Write the catalog-wide listing. Runs every time the menu becomes active.
pub fn publish_catalog<P: MetadataPort + ?Sized>(port: &mut P, catalog: &Catalog, origin: &str) {
    port.set_structured_data(&catalog_structured_data(catalog, origin));
}

/// In-memory metadata, used by tests and the QA tester.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryMetadata {
    pub title: String,
    pub description: String,
    pub structured_data: Option<Value>,
    pub hidden_content: Option<String>,
}

impl MemoryMetadata {
    #[must_use]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }
}

impl MetadataPort for MemoryMetadata {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    fn set_structured_data(&mut self, document: &Value) {
        self.structured_data = Some(document.clone());
    }

    fn set_hidden_content(&mut self, markup: Option<&str>) {
        self.hidden_content = markup.map(str::to_string);
    }
}
