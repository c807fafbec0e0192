#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod catalog;
pub mod components;
pub mod consent;
pub mod dom;
pub mod logging;
pub mod metadata;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    crate::a11y::install_base_css();
    log::info!(
        "arcade portal starting with {} games",
        crate::catalog::CATALOG.len()
    );
    yew::Renderer::<app::App>::new().render();
}
