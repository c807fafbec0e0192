//! Full-viewport host for one embedded game.

use crate::dom;
use crate::metadata::DocumentMetadata;
use arcade_core::{
    EscapeAction, FullscreenRequest, Game, LOAD_STALL_MS, PlayerAction, PlayerState, SeoLease,
    escape_action, fullscreen_request,
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod frame;
mod header;
#[cfg(test)]
mod tests;

use frame::{GameFrame, LoadingOverlay};
use header::PlayerHeader;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: Game,
    pub on_back: Callback<()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerModel(pub PlayerState);

impl Reducible for PlayerModel {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.reduce(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[function_component(Player)]
pub fn player(p: &Props) -> Html {
    let model = use_reducer(PlayerModel::default);
    let state = model.0;

    // Teardown of the previous owner runs before this setup, so a game to
    // game switch restores the shell values before capturing them again.
    {
        let game = p.game.clone();
        use_effect_with(p.game.id.clone(), move |_| {
            let lease = SeoLease::acquire(&mut DocumentMetadata, &game, &crate::paths::site_origin());
            log::debug!("acquired page metadata for `{}`", lease.game_id());
            move || lease.release(&mut DocumentMetadata)
        });
    }

    {
        let on_back = p.on_back.clone();
        use_effect_with(on_back, move |on_back| {
            let on_back = on_back.clone();
            let listener = dom::document().map(|doc| {
                EventListener::new(&doc, "keydown", move |event| {
                    let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                        return;
                    };
                    if key.key() != "Escape" {
                        return;
                    }
                    match escape_action(dom::fullscreen_active()) {
                        EscapeAction::ExitFullscreen => dom::exit_fullscreen(),
                        EscapeAction::Back => on_back.emit(()),
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |_| {
            let listener = dom::document().map(|doc| {
                EventListener::new(&doc, "fullscreenchange", move |_| {
                    dispatcher.dispatch(PlayerAction::FullscreenChanged(dom::fullscreen_active()));
                })
            });
            move || drop(listener)
        });
    }

    {
        let dispatcher = model.dispatcher();
        use_effect_with(state.reload_token, move |token| {
            let token = *token;
            let timer = Timeout::new(LOAD_STALL_MS, move || {
                dispatcher.dispatch(PlayerAction::LoadStalled { token });
            });
            move || drop(timer)
        });
    }

    let on_reload = {
        let dispatcher = model.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(PlayerAction::Reload))
    };
    let on_loaded = {
        let dispatcher = model.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(PlayerAction::FrameLoaded))
    };
    let on_toggle_fullscreen = Callback::from(move |()| {
        match fullscreen_request(dom::fullscreen_active()) {
            FullscreenRequest::Enter => dom::request_fullscreen(),
            FullscreenRequest::Exit => dom::exit_fullscreen(),
        }
    });
    let dispatch = {
        let dispatcher = model.dispatcher();
        Callback::from(move |action: PlayerAction| dispatcher.dispatch(action))
    };

    let game = &p.game;
    html! {
        <div class="player" role="region" aria-label={format!("Playing {}", game.title)}>
            <PlayerHeader
                title={game.title.clone()}
                visible={state.is_header_visible}
                fullscreen={state.is_fullscreen}
                on_back={p.on_back.clone()}
                on_toggle_fullscreen={on_toggle_fullscreen}
                on_reload={on_reload.clone()}
                on_action={dispatch}
            />
            <div class="player__stage">
                if state.is_loading {
                    <LoadingOverlay
                        title={game.title.clone()}
                        stalled={state.load_stalled}
                        on_reload={on_reload}
                    />
                }
                <GameFrame
                    key={state.reload_token.to_string()}
                    url={game.url.clone()}
                    title={game.title.clone()}
                    on_loaded={on_loaded}
                />
            </div>
        </div>
    }
}
