#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod navigation;
pub mod view;

pub use view::{Portal, PortalProps};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let catalog = (*use_state(crate::catalog::shared_catalog)).clone();
    let nav = navigation::use_portal_navigation(std::rc::Rc::clone(&catalog));
    let show_privacy = use_state(|| !crate::consent::consent_given());

    if matches!(use_route::<Route>(), Some(Route::NotFound)) {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let open_privacy = {
        let show_privacy = show_privacy.clone();
        Callback::from(move |()| show_privacy.set(true))
    };
    let close_privacy = {
        let show_privacy = show_privacy.clone();
        Callback::from(move |()| show_privacy.set(false))
    };
    let accept_privacy = {
        let show_privacy = show_privacy.clone();
        Callback::from(move |()| {
            crate::consent::record_consent();
            show_privacy.set(false);
        })
    };

    html! {
        <Portal
            catalog={catalog}
            view={nav.view.clone()}
            on_select={nav.select.clone()}
            on_back={nav.back.clone()}
            privacy_open={*show_privacy}
            on_open_privacy={open_privacy}
            on_close_privacy={close_privacy}
            on_accept_privacy={accept_privacy}
        />
    }
}
