//! Selection state bound to the router's location.
//!
//! The location is the single source of truth: both the first render and every
//! popstate go through [`derive_view`], and only explicit user actions push.

use crate::router::Route;
use arcade_core::{Catalog, DeepLinkQuery, Game, HistoryPort, ViewController, ViewState, derive_view};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// [`HistoryPort`] backed by the router navigator.
pub struct RouterHistory {
    navigator: Navigator,
    query: String,
}

impl RouterHistory {
    #[must_use]
    pub fn new(navigator: Navigator, query: impl Into<String>) -> Self {
        Self {
            navigator,
            query: query.into(),
        }
    }
}

impl HistoryPort for RouterHistory {
    fn location_query(&self) -> String {
        self.query.clone()
    }

    fn push_game(&mut self, slug: &str) {
        if let Err(err) = self
            .navigator
            .push_with_query(&Route::Home, &DeepLinkQuery::for_slug(slug))
        {
            log::warn!("could not push deep link for `{slug}`: {err:?}");
        }
    }

    fn push_home(&mut self) {
        self.navigator.push(&Route::Home);
    }
}

#[derive(Clone, PartialEq)]
pub struct PortalNavigation {
    pub view: ViewState,
    pub select: Callback<Game>,
    pub back: Callback<()>,
}

#[hook]
pub fn use_portal_navigation(catalog: Rc<Catalog>) -> PortalNavigation {
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let view = derive_view(&catalog, &query);

    let select = {
        let navigator = navigator.clone();
        let catalog = Rc::clone(&catalog);
        let query = query.clone();
        Callback::from(move |game: Game| {
            let Some(nav) = navigator.clone() else {
                return;
            };
            let mut controller = ViewController::new(&catalog, RouterHistory::new(nav, query.clone()));
            controller.select(&game);
            crate::a11y::set_status(&format!("Opening {}", game.title));
        })
    };

    let back = Callback::from(move |()| {
        let Some(nav) = navigator.clone() else {
            return;
        };
        let mut controller = ViewController::new(&catalog, RouterHistory::new(nav, query.clone()));
        if controller.selected().is_some() {
            controller.back();
            crate::a11y::set_status("Back to the game list");
        }
    });

    PortalNavigation { view, select, back }
}
