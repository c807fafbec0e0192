//! Headless portal: navigation plus the metadata hand-off that the web views
//! perform through their mount/unmount effects.

use crate::catalog::{Catalog, Game};
use crate::navigation::{HistoryPort, ViewController};
use crate::seo::{MetadataPort, SeoLease, publish_catalog};
use crate::view::ViewState;

#[derive(Debug)]
pub struct PortalSession<'a, H: HistoryPort, M: MetadataPort> {
    controller: ViewController<'a, H>,
    metadata: M,
    lease: Option<SeoLease>,
    origin: String,
}

impl<'a, H: HistoryPort, M: MetadataPort> PortalSession<'a, H, M> {
    /// Start a session at the history's current URL and apply the initial view's metadata.
    pub fn start(catalog: &'a Catalog, history: H, metadata: M, origin: &str) -> Self {
        let mut session = Self {
            controller: ViewController::new(catalog, history),
            metadata,
            lease: None,
            origin: origin.to_string(),
        };
        session.reconcile();
        session
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        self.controller.view()
    }

    #[must_use]
    pub const fn metadata(&self) -> &M {
        &self.metadata
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        self.controller.history()
    }

    pub const fn history_mut(&mut self) -> &mut H {
        self.controller.history_mut()
    }

    #[must_use]
    pub fn lease(&self) -> Option<&SeoLease> {
        self.lease.as_ref()
    }

    pub fn select(&mut self, game: &Game) {
        self.controller.select(game);
        self.reconcile();
    }

    pub fn select_slug(&mut self, slug: &str) -> bool {
        let opened = self.controller.select_slug(slug).is_some();
        if opened {
            self.reconcile();
        }
        opened
    }

    pub fn back(&mut self) {
        self.controller.back();
        self.reconcile();
    }

    /// Call after the history cursor moved (browser back/forward).
    pub fn on_history_navigation(&mut self) {
        self.controller.sync_from_history();
        self.reconcile();
    }

    /// Release the previous owner's lease before the next owner writes.
    fn reconcile(&mut self) {
        let selected_id = self.controller.selected().map(|game| game.id.as_str());
        let lease_id = self.lease.as_ref().map(SeoLease::game_id);
        if selected_id.is_some() && selected_id == lease_id {
            return;
        }

        if let Some(lease) = self.lease.take() {
            lease.release(&mut self.metadata);
        }

        match self.controller.view() {
            ViewState::Player(game) => {
                self.lease = Some(SeoLease::acquire(&mut self.metadata, game, &self.origin));
            }
            ViewState::Menu => {
                publish_catalog(&mut self.metadata, self.controller.catalog(), &self.origin);
            }
        }
    }
}
