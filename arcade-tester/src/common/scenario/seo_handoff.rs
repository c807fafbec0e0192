use anyhow::{Result, ensure};
use arcade_core::{Catalog, Game};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Check, PortalScenario, ScenarioCtx, session_at};

pub struct SeoHandoffScenario;

fn expected_title<'a>(game: &'a Game, shell: &'a str) -> &'a str {
    game.seo_title.as_deref().unwrap_or(shell)
}

#[async_trait::async_trait]
impl BrowserScenario for SeoHandoffScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let mut games = ctx.catalog.iter();
        let (Some(first), Some(second)) = (games.next(), games.next()) else {
            anyhow::bail!("seo hand-off needs at least two games");
        };

        driver.goto(&ctx.base_url).await?;
        ctx.page.accept_consent().await?;
        let menu = ctx
            .page
            .wait_for("menu with catalog listing", |page| {
                page.showing_menu() && page.structured_data_type() == Some("ItemList")
            })
            .await?;
        let shell_title = menu.title.clone();

        ctx.page.open_card(&first.slug).await?;
        let page = ctx
            .page
            .wait_for("first game metadata", |page| page.showing_frame(&first.url))
            .await?;
        ensure!(
            page.title == expected_title(first, &shell_title),
            "title for {} was `{}`",
            first.slug,
            page.title
        );
        ensure!(
            page.structured_data_type() == Some("BreadcrumbList"),
            "game structured data missing: {:?}",
            page.structured_data
        );

        driver.back().await?;
        let page = ctx
            .page
            .wait_for("menu after back", |page| page.showing_menu())
            .await?;
        ensure!(
            page.title == shell_title,
            "title not restored: `{}`",
            page.title
        );
        ensure!(page.seo_content.is_none(), "crawler content left behind");
        ensure!(
            page.structured_data_type() == Some("ItemList"),
            "catalog listing not republished"
        );

        ctx.page.open_card(&second.slug).await?;
        let page = ctx
            .page
            .wait_for("second game metadata", |page| page.showing_frame(&second.url))
            .await?;
        ensure!(
            page.title == expected_title(second, &shell_title),
            "title for {} was `{}`",
            second.slug,
            page.title
        );
        if let (Some(stale), Some(current)) = (&first.seo_content, &page.seo_content) {
            ensure!(
                !current.contains(stale.as_str()),
                "{} crawler content still present",
                first.slug
            );
        }
        if ctx.verbose {
            println!("  🏷️  metadata followed {} then {}", first.slug, second.slug);
        }
        Ok(())
    }
}

impl PortalScenario for SeoHandoffScenario {
    fn name(&self) -> &'static str {
        "SEO Hand-off"
    }

    fn checks(&self) -> Vec<(&'static str, Check)> {
        vec![
            ("selection applies seo title and description", selection_applies_fields),
            ("back restores the shell metadata", back_restores_shell),
            ("switching games leaves only the last game's metadata", switch_keeps_last),
            ("menu republishes the catalog listing", menu_republishes_listing),
        ]
    }

    fn has_browser_half(&self) -> bool {
        true
    }
}

fn selection_applies_fields(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        let mut session = session_at(catalog, "/");
        session.select(game);
        let page = session.metadata();
        ensure!(
            page.title == expected_title(game, &catalog.title),
            "{} title was `{}`",
            game.slug,
            page.title
        );
        let description = game.seo_description.as_deref().unwrap_or(&catalog.subtitle);
        ensure!(
            page.description == description,
            "{} description was `{}`",
            game.slug,
            page.description
        );
        ensure!(
            page.hidden_content == game.seo_content,
            "{} crawler content mismatch",
            game.slug
        );
    }
    Ok(())
}

fn back_restores_shell(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        let mut session = session_at(catalog, "/");
        session.select(game);
        session.back();
        let page = session.metadata();
        ensure!(page.title == catalog.title, "title not restored after {}", game.slug);
        ensure!(
            page.description == catalog.subtitle,
            "description not restored after {}",
            game.slug
        );
        ensure!(page.hidden_content.is_none(), "crawler content left by {}", game.slug);
    }
    Ok(())
}

fn switch_keeps_last(catalog: &Catalog) -> Result<()> {
    let mut games = catalog.iter();
    let (Some(first), Some(second)) = (games.next(), games.next()) else {
        return Ok(());
    };
    let mut session = session_at(catalog, "/");
    session.select(first);
    session.select(second);

    let page = session.metadata();
    ensure!(
        page.title == expected_title(second, &catalog.title),
        "title after switch was `{}`",
        page.title
    );
    ensure!(
        page.hidden_content == second.seo_content,
        "crawler content after switch belongs to the wrong game"
    );
    let name = page
        .structured_data
        .as_ref()
        .and_then(|doc| doc["@graph"][1]["name"].as_str());
    ensure!(
        name == Some(second.title.as_str()),
        "structured data names {name:?}"
    );
    let previous = session.lease().map(|lease| lease.previous_title().to_string());
    ensure!(
        previous.as_deref() == Some(catalog.title.as_str()),
        "second lease captured {previous:?} instead of the shell title"
    );
    Ok(())
}

fn menu_republishes_listing(catalog: &Catalog) -> Result<()> {
    let Some(game) = catalog.iter().next() else {
        return Ok(());
    };
    let mut session = session_at(catalog, "/");
    for _ in 0..2 {
        session.select(game);
        session.back();
        let kind = session
            .metadata()
            .structured_data
            .as_ref()
            .and_then(|doc| doc["@type"].as_str());
        ensure!(kind == Some("ItemList"), "menu left structured data {kind:?}");
    }
    Ok(())
}
