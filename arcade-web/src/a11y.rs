// Accessibility helpers

const BASE_STYLE_ID: &str = "arcade-a11y";
const STATUS_ID: &str = "arcade-status";
const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// CSS for visible focus indicators, screen reader text and off-screen crawler content.
///
/// `.seo-offscreen` keeps content in the accessibility tree while moving it out of view.
#[must_use]
pub const fn base_css() -> &'static str {
    ":focus-visible{outline:3px solid #818cf8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;} .seo-offscreen{position:absolute;left:-10000px;top:auto;width:1px;height:1px;overflow:hidden;}"
}

/// Inject [`base_css`] into `<head>` once.
pub fn install_base_css() {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    let Some(head) = doc.head() else {
        return;
    };
    match crate::dom::ensure_element(&doc, &head, "style", BASE_STYLE_ID) {
        Ok(style) => style.set_text_content(Some(base_css())),
        Err(err) => log::warn!(
            "could not install accessibility styles: {}",
            crate::dom::js_error_message(&err)
        ),
    }
}

/// Update the polite live region so assistive technology announces `msg`.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_ID)) {
        node.set_text_content(Some(msg));
    }
}

/// Move focus back to the element with `id`, if it still exists.
pub fn restore_focus(id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Index Tab should wrap to among `count` focusable elements, or `None` to
/// let the browser move focus. `current` is `None` when focus sits on the
/// container itself.
#[must_use]
pub const fn focus_wrap_target(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (current, backwards) {
        (None, false) => Some(0),
        (None | Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Keep Tab and Shift+Tab cycling inside `container`.
pub fn trap_focus_in(container: &web_sys::Element, event: &web_sys::KeyboardEvent) {
    use wasm_bindgen::JsCast;

    if event.key() != "Tab" {
        return;
    }
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return;
    };
    let items: Vec<web_sys::HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect();
    let active = crate::dom::document().and_then(|doc| doc.active_element());
    let current = active.and_then(|active| {
        items
            .iter()
            .position(|el| AsRef::<web_sys::Element>::as_ref(el) == &active)
    });
    if let Some(target) = focus_wrap_target(items.len(), current, event.shift_key())
        .and_then(|i| items.get(i))
    {
        event.prevent_default();
        let _ = target.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::{base_css, focus_wrap_target};

    #[test]
    fn tab_wraps_at_either_end() {
        assert_eq!(focus_wrap_target(3, Some(2), false), Some(0));
        assert_eq!(focus_wrap_target(3, Some(0), true), Some(2));
        assert_eq!(focus_wrap_target(3, Some(1), false), None);
        assert_eq!(focus_wrap_target(3, Some(1), true), None);
    }

    #[test]
    fn tab_from_container_enters_dialog() {
        assert_eq!(focus_wrap_target(2, None, false), Some(0));
        assert_eq!(focus_wrap_target(2, None, true), Some(1));
        assert_eq!(focus_wrap_target(0, None, false), None);
    }

    #[test]
    fn base_css_defines_helper_classes() {
        let css = base_css();
        assert!(css.contains(".sr-only"));
        assert!(css.contains(".seo-offscreen"));
        assert!(css.contains(":focus-visible"));
    }
}
