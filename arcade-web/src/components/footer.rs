use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub site_title: String,
    #[prop_or_default]
    pub on_open_privacy: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let open_privacy = {
        let cb = p.on_open_privacy.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <footer class="site-footer">
            <span class="site-footer__powered">{ "Powered by Rust & Yew" }</span>
            <button id="privacy-open-btn" type="button" class="site-footer__link" onclick={open_privacy}>
                { "Privacy & Terms" }
            </button>
            <span class="site-footer__copy">{ format!("© {}", p.site_title) }</span>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn footer_links_privacy_dialog() {
        let props = Props {
            site_title: String::from("THE PLAYGROUND"),
            on_open_privacy: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
        assert!(html.contains("<footer"));
        assert!(html.contains("privacy-open-btn"));
        assert!(html.contains("THE PLAYGROUND"));
    }
}
