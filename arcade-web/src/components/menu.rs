use crate::components::footer::Footer;
use crate::components::game_card::GameCard;
use crate::metadata::DocumentMetadata;
use arcade_core::{Catalog, Game, publish_catalog};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub on_select: Callback<Game>,
    #[prop_or_default]
    pub on_open_privacy: Callback<()>,
}

/// Landing page: hero, one card per game in catalog order, footer.
#[function_component(Menu)]
pub fn menu(p: &Props) -> Html {
    // The menu owns the structured-data element whenever it is mounted.
    {
        let catalog = Rc::clone(&p.catalog);
        use_effect_with((), move |_| {
            publish_catalog(&mut DocumentMetadata, &catalog, &crate::paths::site_origin());
        });
    }

    let catalog = &p.catalog;
    let grid = if catalog.is_empty() {
        html! {
            <div class="menu__empty" role="status">
                <h3>{ "No games configured yet" }</h3>
                <p>{ "Check catalog.json to add your games." }</p>
            </div>
        }
    } else {
        html! {
            <div class="menu__grid" role="list">
                { for catalog.iter().map(|game| html! {
                    <div role="listitem" key={game.id.clone()}>
                        <GameCard game={game.clone()} on_select={p.on_select.clone()} />
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <div class="menu">
            <section class="menu__hero">
                <span class="menu__badge">{ "Welcome" }</span>
                <h1 class="menu__title">{ catalog.title.clone() }</h1>
                <p class="menu__subtitle">{ catalog.subtitle.clone() }</p>
            </section>
            <main id="main" role="main" class="menu__main">
                { grid }
            </main>
            <Footer site_title={catalog.title.clone()} on_open_privacy={p.on_open_privacy.clone()} />
        </div>
    }
}
