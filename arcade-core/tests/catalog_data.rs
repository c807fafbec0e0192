use arcade_core::{Catalog, is_url_safe_slug};

const CATALOG_JSON: &str = include_str!("../../arcade-web/static/catalog.json");

#[test]
fn shipped_catalog_is_valid() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("shipped catalog must validate");
    assert!(!catalog.is_empty());
    assert!(!catalog.title.is_empty());
    assert!(!catalog.subtitle.is_empty());
}

#[test]
fn shipped_games_are_fully_described() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    for game in catalog.iter() {
        assert!(is_url_safe_slug(&game.slug), "slug {}", game.slug);
        assert!(game.url.starts_with("https://"), "url {}", game.url);
        assert!(game.image.is_some(), "{} lacks an image", game.id);
        assert!(game.seo_title.is_some(), "{} lacks seoTitle", game.id);
        assert!(game.seo_description.is_some(), "{} lacks seoDescription", game.id);
    }
}

#[test]
fn catalog_order_is_display_order() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let slugs: Vec<&str> = catalog.iter().map(|g| g.slug.as_str()).collect();
    assert_eq!(slugs, ["dual-n-back", "imposter"]);
}

#[test]
fn catalog_round_trips_through_serde() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.contains("\"seoTitle\""));
    assert!(!json.contains("\"thumbnail\""));
    assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
}
