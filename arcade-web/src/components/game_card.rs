use arcade_core::Game;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: Game,
    pub on_select: Callback<Game>,
}

/// Summary tile for one game. The whole card is the activation target and
/// nothing inside it handles clicks, so one click selects exactly once.
#[function_component(GameCard)]
pub fn game_card(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_select.clone();
        let game = p.game.clone();
        Callback::from(move |_: MouseEvent| cb.emit(game.clone()))
    };
    let on_keydown = {
        let cb = p.on_select.clone();
        let game = p.game.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit(game.clone());
            }
        })
    };

    let game = &p.game;
    html! {
        <article
            class="game-card"
            role="button"
            tabindex="0"
            data-slug={game.slug.clone()}
            aria-label={format!("Play {}", game.title)}
            onclick={on_click}
            onkeydown={on_keydown}
        >
            if let Some(image) = &game.image {
                <img class="game-card__image" src={image.clone()} alt="" loading="lazy" />
            }
            <div class="game-card__body">
                <div class="game-card__meta">
                    <span class="game-card__category">{ game.category.clone() }</span>
                </div>
                <h3 class="game-card__title">{ game.title.clone() }</h3>
                <p class="game-card__description">{ game.description.clone() }</p>
            </div>
            <div class="game-card__footer" aria-hidden="true">
                <span>{ "Play Now" }</span>
                <span class="game-card__arrow">{ "→" }</span>
            </div>
        </article>
    }
}
