//! Deployment base path and canonical origin.
//!
//! `PUBLIC_URL` (e.g. `/play` for GitHub Pages) and `ARCADE_ORIGIN`
//! (e.g. `https://arcade.example.com`) are read at compile time.

/// Base path for the router (e.g., `/play` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Origin (plus base path) used for absolute links in structured data.
///
/// Prefers `ARCADE_ORIGIN`; otherwise uses the page's own origin.
#[must_use]
pub fn site_origin() -> String {
    let origin = option_env!("ARCADE_ORIGIN")
        .map(str::to_string)
        .or_else(runtime_origin)
        .unwrap_or_default();
    origin_with_base(&origin, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn runtime_origin() -> Option<String> {
    crate::dom::window().and_then(|win| win.location().origin().ok())
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn origin_with_base(origin: &str, base: &str) -> String {
    let origin = origin.trim_end_matches('/');
    match router_base_with_base(base) {
        Some(base) => format!("{origin}/{}", base.trim_start_matches('/')),
        None => origin.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(router_base_with_base("/play/"), Some(String::from("/play")));
        assert_eq!(router_base_with_base("  "), None);
    }

    #[test]
    fn origin_joins_base_path() {
        assert_eq!(
            origin_with_base("https://arcade.example.com/", ""),
            "https://arcade.example.com"
        );
        assert_eq!(
            origin_with_base("https://arcade.example.com", "/play/"),
            "https://arcade.example.com/play"
        );
    }
}
