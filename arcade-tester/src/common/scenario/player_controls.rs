use anyhow::{Result, ensure};
use arcade_core::{
    Catalog, EscapeAction, FRAME_PERMISSIONS, FullscreenRequest, PlayerAction, PlayerState,
    escape_action, fullscreen_request,
};

use super::{LogicScenario, session_at};

pub fn scenario() -> LogicScenario {
    LogicScenario::new(
        "Player Controls",
        vec![
            ("escape leaves fullscreen before the game", two_stage_escape),
            ("fullscreen toggle follows the browser", fullscreen_follows_browser),
            ("reload remounts the frame", reload_remounts),
            ("hover is ignored after a touch", touch_disables_hover),
            ("stale stall timers are ignored", stale_stall_ignored),
            ("frame grants the embedding permissions", frame_permissions),
        ],
    )
}

fn two_stage_escape(catalog: &Catalog) -> Result<()> {
    let Some(game) = catalog.iter().next() else {
        return Ok(());
    };
    let mut session = session_at(catalog, "/");
    session.select(game);

    let mut fullscreen = true;
    for expected in [EscapeAction::ExitFullscreen, EscapeAction::Back] {
        let action = escape_action(fullscreen);
        ensure!(action == expected, "escape gave {action:?}, wanted {expected:?}");
        match action {
            EscapeAction::ExitFullscreen => {
                fullscreen = false;
                ensure!(
                    session.view().selected() == Some(game),
                    "leaving fullscreen closed the game"
                );
            }
            EscapeAction::Back => session.back(),
        }
    }
    ensure!(session.view().is_menu(), "second escape did not return to the menu");
    Ok(())
}

fn fullscreen_follows_browser(_catalog: &Catalog) -> Result<()> {
    ensure!(fullscreen_request(false) == FullscreenRequest::Enter, "toggle from windowed");
    ensure!(fullscreen_request(true) == FullscreenRequest::Exit, "toggle from fullscreen");

    // A refused request never reports a change, so the state stays put.
    let state = PlayerState::default();
    ensure!(!state.is_fullscreen, "player mounted fullscreen");
    let entered = state.reduce(PlayerAction::FullscreenChanged(true));
    ensure!(entered.is_fullscreen, "fullscreenchange was not applied");
    Ok(())
}

fn reload_remounts(_catalog: &Catalog) -> Result<()> {
    let loaded = PlayerState::default().reduce(PlayerAction::FrameLoaded);
    ensure!(!loaded.is_loading, "load signal did not clear the indicator");
    let reloaded = loaded.reduce(PlayerAction::Reload);
    ensure!(reloaded.is_loading, "reload did not show the indicator");
    ensure!(
        reloaded.reload_token != loaded.reload_token,
        "reload kept the frame token"
    );
    Ok(())
}

fn touch_disables_hover(_catalog: &Catalog) -> Result<()> {
    let hovered = PlayerState::default().reduce(PlayerAction::HoverReveal);
    ensure!(hovered.is_header_visible, "hover did not reveal the header");

    let tapped = PlayerState::default().reduce(PlayerAction::HandleTapped);
    ensure!(tapped.is_header_visible, "tap did not reveal the header");
    let after_hover = tapped.reduce(PlayerAction::HoverHide);
    ensure!(after_hover.is_header_visible, "hover hid a tapped-open header");
    let closed = after_hover.reduce(PlayerAction::HandleTapped);
    ensure!(!closed.is_header_visible, "second tap did not close the header");
    Ok(())
}

fn stale_stall_ignored(_catalog: &Catalog) -> Result<()> {
    let first = PlayerState::default();
    let reloaded = first.reduce(PlayerAction::Reload);
    let stale = reloaded.reduce(PlayerAction::LoadStalled {
        token: first.reload_token,
    });
    ensure!(!stale.load_stalled, "old timer flagged the new frame");
    let current = reloaded.reduce(PlayerAction::LoadStalled {
        token: reloaded.reload_token,
    });
    ensure!(current.load_stalled, "current timer was ignored");
    ensure!(current.is_loading, "stall hint removed the indicator");
    Ok(())
}

fn frame_permissions(_catalog: &Catalog) -> Result<()> {
    for permission in ["fullscreen", "gamepad", "autoplay"] {
        ensure!(
            FRAME_PERMISSIONS.contains(permission),
            "frame does not allow {permission}"
        );
    }
    Ok(())
}
