use crate::components::menu::Menu;
use crate::components::player::Player;
use crate::components::privacy_policy::PrivacyPolicy;
use arcade_core::{Catalog, Game, ViewState};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PortalProps {
    pub catalog: Rc<Catalog>,
    pub view: ViewState,
    pub on_select: Callback<Game>,
    pub on_back: Callback<()>,
    #[prop_or_default]
    pub privacy_open: bool,
    #[prop_or_default]
    pub on_open_privacy: Callback<()>,
    #[prop_or_default]
    pub on_close_privacy: Callback<()>,
    #[prop_or_default]
    pub on_accept_privacy: Callback<()>,
}

/// Menu or player, plus the privacy dialog on top of either.
#[function_component(Portal)]
pub fn portal(p: &PortalProps) -> Html {
    let body = match &p.view {
        ViewState::Menu => html! {
            <Menu
                catalog={Rc::clone(&p.catalog)}
                on_select={p.on_select.clone()}
                on_open_privacy={p.on_open_privacy.clone()}
            />
        },
        ViewState::Player(game) => html! {
            <Player key={game.id.clone()} game={game.clone()} on_back={p.on_back.clone()} />
        },
    };

    html! {
        <>
            { body }
            <PrivacyPolicy
                open={p.privacy_open}
                on_close={p.on_close_privacy.clone()}
                on_accept={p.on_accept_privacy.clone()}
            />
        </>
    }
}
