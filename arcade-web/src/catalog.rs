//! The catalog shipped with the site, embedded at compile time.

use arcade_core::Catalog;
use once_cell::sync::Lazy;
use std::rc::Rc;

const CATALOG_JSON: &str = include_str!("../static/catalog.json");

/// Parsed once on first use. An invalid file is logged and replaced by an empty
/// catalog so the menu shows its placeholder instead of failing.
pub static CATALOG: Lazy<Catalog> = Lazy::new(|| load_catalog(CATALOG_JSON));

fn load_catalog(json: &str) -> Catalog {
    Catalog::from_json(json).unwrap_or_else(|err| {
        log::error!("catalog.json rejected: {err}");
        Catalog::empty()
    })
}

/// Shared handle suitable for component props.
#[must_use]
pub fn shared_catalog() -> Rc<Catalog> {
    Rc::new(CATALOG.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        assert_eq!(CATALOG.len(), 2);
        assert_eq!(shared_catalog().title, "THE PLAYGROUND");
    }

    #[test]
    fn invalid_catalog_falls_back_to_empty() {
        assert!(load_catalog("{ not json").is_empty());
        let duplicate = r#"{ "games": [
            { "id": "a", "slug": "same", "title": "A", "description": "", "category": "", "url": "https://a" },
            { "id": "b", "slug": "same", "title": "B", "description": "", "category": "", "url": "https://b" }
        ] }"#;
        assert!(load_catalog(duplicate).is_empty());
    }
}
