//! Selection state kept in sync with browser history.

use crate::catalog::{Catalog, Game};
use crate::deep_link::deep_link_path;
use crate::view::{ViewState, derive_view};

/// The slice of browser history the controller needs.
pub trait HistoryPort {
    /// Current query string, including the leading `?` when present.
    fn location_query(&self) -> String;

    /// Push a new entry for `/?game=<slug>`. Never replaces the current entry.
    fn push_game(&mut self, slug: &str);

    /// Push a new entry for the bare root path.
    fn push_home(&mut self);
}

/// Owns the current [`ViewState`] and keeps it consistent with a [`HistoryPort`].
#[derive(Debug)]
pub struct ViewController<'a, H: HistoryPort> {
    catalog: &'a Catalog,
    history: H,
    view: ViewState,
}

impl<'a, H: HistoryPort> ViewController<'a, H> {
    /// Build a controller whose initial view is read from the history's current URL.
    pub fn new(catalog: &'a Catalog, history: H) -> Self {
        let view = derive_view(catalog, &history.location_query());
        Self {
            catalog,
            history,
            view,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Game> {
        self.view.selected()
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    pub const fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Open `game`, adding one history entry.
    pub fn select(&mut self, game: &Game) {
        log::debug!("opening game `{}`", game.slug);
        self.history.push_game(&game.slug);
        self.view = ViewState::Player(game.clone());
    }

    /// Open the catalog entry with `slug`, if there is one.
    pub fn select_slug(&mut self, slug: &str) -> Option<&Game> {
        let catalog = self.catalog;
        let game = catalog.find_by_slug(slug)?;
        self.select(game);
        self.selected()
    }

    /// Leave the player, adding one history entry for the root path.
    pub fn back(&mut self) {
        log::debug!("returning to menu");
        self.history.push_home();
        self.view = ViewState::Menu;
    }

    /// Re-derive the view after a back/forward navigation. Reads history only.
    pub fn sync_from_history(&mut self) -> &ViewState {
        self.view = derive_view(self.catalog, &self.history.location_query());
        &self.view
    }
}

/// In-memory history with back/forward support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::starting_at("/")
    }
}

impl MemoryHistory {
    /// History with a single entry, e.g. `/?game=imposter` for a deep-linked load.
    #[must_use]
    pub fn starting_at(url: &str) -> Self {
        Self {
            entries: vec![url.to_string()],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &str {
        self.entries.get(self.cursor).map_or("/", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step back one entry. Returns `false` when already at the oldest entry.
    pub fn go_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` when already at the newest entry.
    pub fn go_forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn push(&mut self, url: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }
}

impl HistoryPort for MemoryHistory {
    fn location_query(&self) -> String {
        self.current()
            .find('?')
            .map(|idx| self.current()[idx..].to_string())
            .unwrap_or_default()
    }

    fn push_game(&mut self, slug: &str) {
        self.push(deep_link_path(slug));
    }

    fn push_home(&mut self) {
        self.push(String::from("/"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::two_games;

    #[test]
    fn select_pushes_a_deep_link_entry() {
        let catalog = two_games();
        let mut controller = ViewController::new(&catalog, MemoryHistory::default());
        assert!(controller.view().is_menu());

        let game = catalog.games[1].clone();
        controller.select(&game);
        assert_eq!(controller.history().current(), "/?game=imposter");
        assert_eq!(controller.history().location_query(), "?game=imposter");
        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.selected(), Some(&game));
    }

    #[test]
    fn back_pushes_root_and_clears_selection() {
        let catalog = two_games();
        let mut controller = ViewController::new(&catalog, MemoryHistory::default());
        controller.select_slug("dual-n-back");
        controller.back();
        assert_eq!(controller.history().current(), "/");
        assert_eq!(controller.history().len(), 3);
        assert!(controller.selected().is_none());
    }

    #[test]
    fn select_slug_ignores_unknown_games() {
        let catalog = two_games();
        let mut controller = ViewController::new(&catalog, MemoryHistory::default());
        assert!(controller.select_slug("nope").is_none());
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn sync_from_history_follows_back_and_forward_without_pushing() {
        let catalog = two_games();
        let mut controller = ViewController::new(&catalog, MemoryHistory::default());
        controller.select_slug("imposter");

        assert!(controller.history_mut().go_back());
        assert!(controller.sync_from_history().is_menu());
        assert!(controller.sync_from_history().is_menu());

        assert!(controller.history_mut().go_forward());
        let view = controller.sync_from_history().clone();
        assert_eq!(view.selected().map(|g| g.slug.as_str()), Some("imposter"));
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push_game("a");
        history.push_game("b");
        assert!(history.go_back());
        history.push_home();
        assert_eq!(history.len(), 3);
        assert!(!history.go_forward());
        assert_eq!(history.current(), "/");
    }
}
