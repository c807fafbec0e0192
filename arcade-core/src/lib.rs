//! Arcade Portal Core
//!
//! Platform-agnostic logic for the arcade portal: the game catalog, deep-link
//! handling, the menu/player view state, browser-history synchronisation and the
//! page metadata hand-off. Browser specifics live behind the [`HistoryPort`] and
//! [`MetadataPort`] traits.

pub mod catalog;
pub mod deep_link;
pub mod navigation;
pub mod player;
pub mod seo;
pub mod session;
pub mod structured_data;
pub mod view;

pub use catalog::{Catalog, CatalogError, Game, is_url_safe_slug};
pub use deep_link::{
    DeepLinkQuery, GAME_PARAM, canonical_url, deep_link_path, game_query, home_url,
    slug_from_query,
};
pub use navigation::{HistoryPort, MemoryHistory, ViewController};
pub use player::{
    EscapeAction, FRAME_PERMISSIONS, FullscreenRequest, LOAD_STALL_MS, PlayerAction, PlayerState,
    escape_action, fullscreen_request,
};
pub use seo::{MemoryMetadata, MetadataPort, SeoLease, publish_catalog};
pub use session::PortalSession;
pub use structured_data::{catalog_structured_data, game_structured_data};
pub use view::{ViewState, derive_view};
