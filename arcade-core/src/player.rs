//! State machine behind the embedded game host.

/// Permissions granted to the embedded game frame.
pub const FRAME_PERMISSIONS: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; fullscreen; gamepad";

/// How long the loading indicator runs before the "taking longer" hint appears.
pub const LOAD_STALL_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    /// Changing this remounts the frame.
    pub reload_token: u32,
    pub is_loading: bool,
    pub is_fullscreen: bool,
    pub is_header_visible: bool,
    /// Set once any touch interaction is seen; hover no longer reveals the header.
    pub touch_seen: bool,
    pub load_stalled: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            reload_token: 0,
            is_loading: true,
            is_fullscreen: false,
            is_header_visible: false,
            touch_seen: false,
            load_stalled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Reload,
    FrameLoaded,
    /// Reported by the browser after a fullscreen request was honoured (or exited).
    FullscreenChanged(bool),
    HoverReveal,
    HoverHide,
    HandleTapped,
    /// Stall timer armed for the frame with `token` fired.
    LoadStalled { token: u32 },
}

impl PlayerState {
    #[must_use]
    pub const fn reduce(self, action: PlayerAction) -> Self {
        match action {
            PlayerAction::Reload => Self {
                reload_token: self.reload_token.wrapping_add(1),
                is_loading: true,
                load_stalled: false,
                ..self
            },
            PlayerAction::FrameLoaded => Self {
                is_loading: false,
                load_stalled: false,
                ..self
            },
            PlayerAction::FullscreenChanged(active) => Self {
                is_fullscreen: active,
                ..self
            },
            PlayerAction::HoverReveal if !self.touch_seen => Self {
                is_header_visible: true,
                ..self
            },
            PlayerAction::HoverHide if !self.touch_seen => Self {
                is_header_visible: false,
                ..self
            },
            PlayerAction::HoverReveal | PlayerAction::HoverHide => self,
            PlayerAction::HandleTapped => Self {
                is_header_visible: !self.is_header_visible,
                touch_seen: true,
                ..self
            },
            PlayerAction::LoadStalled { token }
                if token == self.reload_token && self.is_loading =>
            {
                Self {
                    load_stalled: true,
                    ..self
                }
            }
            PlayerAction::LoadStalled { .. } => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    ExitFullscreen,
    Back,
}

/// First Escape leaves fullscreen, the next one leaves the game.
#[must_use]
pub const fn escape_action(fullscreen_active: bool) -> EscapeAction {
    if fullscreen_active {
        EscapeAction::ExitFullscreen
    } else {
        EscapeAction::Back
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

#[must_use]
pub const fn fullscreen_request(fullscreen_active: bool) -> FullscreenRequest {
    if fullscreen_active {
        FullscreenRequest::Exit
    } else {
        FullscreenRequest::Enter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_loading_with_hidden_header() {
        let state = PlayerState::default();
        assert!(state.is_loading);
        assert!(!state.is_header_visible);
        assert!(!state.is_fullscreen);
    }

    #[test]
    fn reload_changes_token_and_shows_indicator() {
        let loaded = PlayerState::default().reduce(PlayerAction::FrameLoaded);
        assert!(!loaded.is_loading);
        let reloaded = loaded.reduce(PlayerAction::Reload);
        assert!(reloaded.is_loading);
        assert_ne!(reloaded.reload_token, loaded.reload_token);
    }

    #[test]
    fn reload_token_wraps() {
        let state = PlayerState {
            reload_token: u32::MAX,
            ..PlayerState::default()
        };
        assert_eq!(state.reduce(PlayerAction::Reload).reload_token, 0);
    }

    #[test]
    fn fullscreen_only_follows_browser_reports() {
        let state = PlayerState::default();
        assert_eq!(fullscreen_request(state.is_fullscreen), FullscreenRequest::Enter);
        let state = state.reduce(PlayerAction::FullscreenChanged(true));
        assert!(state.is_fullscreen);
        assert_eq!(fullscreen_request(state.is_fullscreen), FullscreenRequest::Exit);
    }

    #[test]
    fn escape_is_two_stage() {
        assert_eq!(escape_action(true), EscapeAction::ExitFullscreen);
        assert_eq!(escape_action(false), EscapeAction::Back);
    }

    #[test]
    fn hover_is_ignored_after_touch() {
        let state = PlayerState::default().reduce(PlayerAction::HoverReveal);
        assert!(state.is_header_visible);
        let state = state.reduce(PlayerAction::HoverHide);
        assert!(!state.is_header_visible);

        let state = state.reduce(PlayerAction::HandleTapped);
        assert!(state.is_header_visible);
        assert!(state.touch_seen);
        let state = state.reduce(PlayerAction::HoverHide);
        assert!(state.is_header_visible, "hover must not stick after a tap");
        let state = state.reduce(PlayerAction::HandleTapped);
        assert!(!state.is_header_visible);
        let state = state.reduce(PlayerAction::HoverReveal);
        assert!(!state.is_header_visible);
    }

    #[test]
    fn stale_stall_timer_is_ignored() {
        let state = PlayerState::default();
        let stalled = state.reduce(PlayerAction::LoadStalled { token: 0 });
        assert!(stalled.load_stalled);

        let reloaded = stalled.reduce(PlayerAction::Reload);
        assert!(!reloaded.load_stalled);
        let still = reloaded.reduce(PlayerAction::LoadStalled { token: 0 });
        assert!(!still.load_stalled);

        let loaded = reloaded.reduce(PlayerAction::FrameLoaded);
        let late = loaded.reduce(PlayerAction::LoadStalled {
            token: loaded.reload_token,
        });
        assert!(!late.load_stalled);
    }
}
