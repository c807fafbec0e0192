use arcade_core::PlayerAction;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: String,
    pub visible: bool,
    pub fullscreen: bool,
    pub on_back: Callback<()>,
    pub on_toggle_fullscreen: Callback<()>,
    pub on_reload: Callback<()>,
    pub on_action: Callback<PlayerAction>,
}

/// Drawer with the player controls, hidden until hovered or tapped open.
#[function_component(PlayerHeader)]
pub fn player_header(p: &Props) -> Html {
    let on_enter = {
        let cb = p.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(PlayerAction::HoverReveal))
    };
    let on_leave = {
        let cb = p.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(PlayerAction::HoverHide))
    };
    let on_handle_touch = {
        let cb = p.on_action.clone();
        Callback::from(move |e: TouchEvent| {
            // Keeps the synthetic mouse events that follow a tap from reaching hover.
            e.prevent_default();
            cb.emit(PlayerAction::HandleTapped);
        })
    };
    let back = {
        let cb = p.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let toggle_fullscreen = {
        let cb = p.on_toggle_fullscreen.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let reload = {
        let cb = p.on_reload.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let drawer_class = classes!(
        "player__header",
        p.visible.then_some("player__header--visible")
    );
    let fullscreen_label = if p.fullscreen {
        "Exit Fullscreen"
    } else {
        "Enter Fullscreen"
    };

    html! {
        <div class="player__chrome" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="player__hover-zone" aria-hidden="true"></div>
            <header class={drawer_class} aria-hidden={(!p.visible).to_string()}>
                <div class="player__header-start">
                    <button type="button" class="player__back" onclick={back}>
                        <span aria-hidden="true">{ "← " }</span>
                        { "Back to Playground" }
                    </button>
                    <h2 class="player__title">{ p.title.clone() }</h2>
                </div>
                <div class="player__header-end">
                    <button
                        type="button"
                        class="player__icon-btn"
                        title={fullscreen_label}
                        aria-label={fullscreen_label}
                        aria-pressed={p.fullscreen.to_string()}
                        onclick={toggle_fullscreen}
                    >
                        { if p.fullscreen { "⤡" } else { "⤢" } }
                    </button>
                    <button
                        type="button"
                        class="player__icon-btn"
                        title="Reload Game"
                        aria-label="Reload Game"
                        onclick={reload}
                    >
                        { "↻" }
                    </button>
                </div>
            </header>
            <button
                type="button"
                class="player__handle"
                aria-label="Show game controls"
                aria-expanded={p.visible.to_string()}
                ontouchstart={on_handle_touch}
            >
                <span class="player__handle-bar" aria-hidden="true"></span>
            </button>
        </div>
    }
}
