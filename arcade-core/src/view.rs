use crate::catalog::{Catalog, Game};
use crate::deep_link::slug_from_query;

/// Which top-level view is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Menu,
    Player(Game),
}

impl ViewState {
    #[must_use]
    pub const fn selected(&self) -> Option<&Game> {
        match self {
            Self::Menu => None,
            Self::Player(game) => Some(game),
        }
    }

    #[must_use]
    pub const fn is_menu(&self) -> bool {
        matches!(self, Self::Menu)
    }
}

/// Derive the view from a query string.
///
/// Used both at startup and for every history navigation so the two can
/// never disagree on how a URL is interpreted.
#[must_use]
pub fn derive_view(catalog: &Catalog, query: &str) -> ViewState {
    slug_from_query(query)
        .and_then(|slug| catalog.find_by_slug(&slug).cloned())
        .map_or(ViewState::Menu, ViewState::Player)
}
