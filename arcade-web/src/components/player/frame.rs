use arcade_core::FRAME_PERMISSIONS;
use web_sys::HtmlIFrameElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FrameProps {
    pub url: String,
    pub title: String,
    pub on_loaded: Callback<()>,
}

/// The embedded game. Remounted by its parent's key on reload.
#[function_component(GameFrame)]
pub fn game_frame(p: &FrameProps) -> Html {
    let onload = {
        let cb = p.on_loaded.clone();
        Callback::from(move |e: Event| {
            cb.emit(());
            // An open dialog keeps focus until it is dismissed.
            if crate::dom::dialog_open() {
                return;
            }
            if let Some(window) = e
                .target_dyn_into::<HtmlIFrameElement>()
                .and_then(|frame| frame.content_window())
                && let Err(err) = window.focus()
            {
                log::debug!(
                    "could not focus game frame: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        })
    };

    html! {
        <iframe
            class="player__frame"
            src={p.url.clone()}
            title={p.title.clone()}
            allow={FRAME_PERMISSIONS}
            allowfullscreen={true}
            {onload}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayProps {
    pub title: String,
    pub stalled: bool,
    pub on_reload: Callback<()>,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(p: &OverlayProps) -> Html {
    let reload = {
        let cb = p.on_reload.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="player__loading" role="status" aria-live="polite">
            <div class="player__spinner" aria-hidden="true"></div>
            <p class="player__loading-text">{ format!("Loading {}...", p.title) }</p>
            if p.stalled {
                <div class="player__stall">
                    <p>{ "This is taking longer than usual." }</p>
                    <button type="button" class="btn" onclick={reload}>{ "Reload" }</button>
                </div>
            }
        </div>
    }
}
