use yew_router::prelude::*;

/// The portal lives on a single path; the selected game travels in the query string.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}
