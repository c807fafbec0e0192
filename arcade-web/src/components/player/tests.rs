use super::*;
use futures::executor::block_on;
use yew::LocalServerRenderer;

const FRAME_PERMISSIONS_ATTR: &str =
    "allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; fullscreen; gamepad\"";

fn imposter() -> Game {
    crate::catalog::CATALOG
        .find_by_slug("imposter")
        .cloned()
        .expect("imposter is in the catalog")
}

fn render_player(game: Game) -> String {
    let props = Props {
        game,
        on_back: Callback::noop(),
    };
    block_on(LocalServerRenderer::<Player>::with_props(props).render())
}

#[test]
fn frame_carries_permissions_and_title() {
    let html = render_player(imposter());
    assert!(html.contains("<iframe"));
    assert!(html.contains(FRAME_PERMISSIONS_ATTR));
    assert!(html.contains("allowfullscreen"));
    assert!(html.contains("title=\"Imposter\""));
}

#[test]
fn mounts_with_loading_indicator_and_hidden_header() {
    let html = render_player(imposter());
    assert!(html.contains("Loading Imposter..."));
    assert!(!html.contains("player__header--visible"));
    assert!(html.contains("Back to Playground"));
    assert!(!html.contains("taking longer"));
}

#[test]
fn stalled_overlay_offers_reload() {
    let props = frame::OverlayProps {
        title: String::from("Imposter"),
        stalled: true,
        on_reload: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoadingOverlay>::with_props(props).render());
    assert!(html.contains("taking longer than usual"));
    assert!(html.contains("Reload"));
}

#[test]
fn header_reflects_visibility_and_fullscreen() {
    let props = header::Props {
        title: String::from("Imposter"),
        visible: true,
        fullscreen: true,
        on_back: Callback::noop(),
        on_toggle_fullscreen: Callback::noop(),
        on_reload: Callback::noop(),
        on_action: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PlayerHeader>::with_props(props).render());
    assert!(html.contains("player__header--visible"));
    assert!(html.contains("Exit Fullscreen"));
    assert!(html.contains("aria-expanded=\"true\""));
}

#[test]
fn model_keeps_identity_for_ignored_actions() {
    let touched = Rc::new(PlayerModel(PlayerState::default()))
        .reduce(PlayerAction::HandleTapped);
    assert!(touched.0.is_header_visible);
    let same = Rc::clone(&touched).reduce(PlayerAction::HoverHide);
    assert!(Rc::ptr_eq(&touched, &same));
}
