use anyhow::{Result, ensure};
use arcade_core::{Catalog, derive_view, game_query, is_url_safe_slug};
use std::collections::HashSet;

use super::LogicScenario;

pub fn scenario() -> LogicScenario {
    LogicScenario::new(
        "Catalog Integrity",
        vec![
            ("catalog validates", validates),
            ("catalog is not empty", not_empty),
            ("slugs are url-safe", slugs_url_safe),
            ("ids and slugs are unique", unique_keys),
            ("urls are absolute https", urls_absolute),
            ("every slug deep-links to its game", slugs_resolve),
        ],
    )
}

fn validates(catalog: &Catalog) -> Result<()> {
    catalog.validate()?;
    Ok(())
}

fn not_empty(catalog: &Catalog) -> Result<()> {
    ensure!(!catalog.is_empty(), "catalog has no games");
    Ok(())
}

fn slugs_url_safe(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        ensure!(
            is_url_safe_slug(&game.slug),
            "slug `{}` of {} is not url-safe",
            game.slug,
            game.id
        );
    }
    Ok(())
}

fn unique_keys(catalog: &Catalog) -> Result<()> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for game in catalog.iter() {
        ensure!(ids.insert(game.id.as_str()), "duplicate id `{}`", game.id);
        ensure!(slugs.insert(game.slug.as_str()), "duplicate slug `{}`", game.slug);
    }
    Ok(())
}

fn urls_absolute(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        ensure!(
            game.url.starts_with("https://"),
            "{} is embedded from a non-https url `{}`",
            game.slug,
            game.url
        );
    }
    Ok(())
}

fn slugs_resolve(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        let view = derive_view(catalog, &game_query(&game.slug));
        ensure!(
            view.selected().map(|g| g.id.as_str()) == Some(game.id.as_str()),
            "`{}` derived {view:?}",
            game_query(&game.slug)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::Game;

    fn game(id: &str, slug: &str, url: &str) -> Game {
        Game {
            id: id.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            category: String::from("Fun"),
            url: url.to_string(),
            image: None,
            seo_title: None,
            seo_description: None,
            seo_content: None,
        }
    }

    #[test]
    fn plain_http_urls_are_flagged() {
        let catalog = Catalog::from_games(vec![game("g1", "one", "http://one.example.com")]);
        assert!(urls_absolute(&catalog).is_err());
    }

    #[test]
    fn duplicate_slugs_are_flagged() {
        let catalog = Catalog::from_games(vec![
            game("g1", "same", "https://a.example.com"),
            game("g2", "same", "https://b.example.com"),
        ]);
        assert!(unique_keys(&catalog).is_err());
        assert!(validates(&catalog).is_err());
    }

    #[test]
    fn empty_catalog_is_flagged() {
        assert!(not_empty(&Catalog::empty()).is_err());
    }
}
