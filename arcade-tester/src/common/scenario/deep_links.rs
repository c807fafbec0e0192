use anyhow::{Result, ensure};
use arcade_core::{Catalog, ViewState, canonical_url, derive_view, slug_from_query};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Check, PortalScenario, ScenarioCtx, session_at};

const BOGUS_SLUG: &str = "not-a-real-slug";

pub struct DeepLinkScenario;

#[async_trait::async_trait]
impl BrowserScenario for DeepLinkScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        for game in ctx.catalog.iter() {
            let url = canonical_url(&ctx.base_url, &game.slug);
            driver.goto(&url).await?;
            ctx.page.accept_consent().await?;
            let page = ctx
                .page
                .wait_for(&format!("player for {}", game.slug), |page| {
                    page.showing_frame(&game.url)
                })
                .await?;
            ensure!(
                page.search == format!("?game={}", game.slug),
                "deep link rewrote the query to `{}`",
                page.search
            );
            if ctx.verbose {
                println!("  🔗 {url} opened {}", game.title);
            }
        }

        driver
            .goto(&canonical_url(&ctx.base_url, BOGUS_SLUG))
            .await?;
        ctx.page
            .wait_for("menu for an unknown slug", |page| page.showing_menu())
            .await?;
        Ok(())
    }
}

impl PortalScenario for DeepLinkScenario {
    fn name(&self) -> &'static str {
        "Deep Links"
    }

    fn checks(&self) -> Vec<(&'static str, Check)> {
        vec![
            ("every slug opens its player on load", initial_load_opens_player),
            ("unknown slug shows the menu", unknown_slug_shows_menu),
            ("missing or empty param shows the menu", missing_param_shows_menu),
            ("first game param wins", first_param_wins),
            ("slugs are percent-decoded", percent_decoding),
        ]
    }

    fn has_browser_half(&self) -> bool {
        true
    }
}

fn initial_load_opens_player(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        let session = session_at(catalog, &format!("/?game={}", game.slug));
        ensure!(
            session.view() == &ViewState::Player(game.clone()),
            "`{}` did not open directly",
            game.slug
        );
        ensure!(
            session.history().len() == 1,
            "initial load pushed a history entry"
        );
    }
    Ok(())
}

fn unknown_slug_shows_menu(catalog: &Catalog) -> Result<()> {
    let session = session_at(catalog, &format!("/?game={BOGUS_SLUG}"));
    ensure!(session.view().is_menu(), "unknown slug derived {:?}", session.view());
    ensure!(
        session.metadata().title == catalog.title,
        "menu changed the title to `{}`",
        session.metadata().title
    );
    Ok(())
}

fn missing_param_shows_menu(catalog: &Catalog) -> Result<()> {
    for query in ["", "?", "?game=", "?other=imposter"] {
        ensure!(
            derive_view(catalog, query).is_menu(),
            "`{query}` should show the menu"
        );
    }
    Ok(())
}

fn first_param_wins(catalog: &Catalog) -> Result<()> {
    let mut games = catalog.iter();
    let (Some(first), Some(second)) = (games.next(), games.next()) else {
        return Ok(());
    };
    let query = format!("?game={}&game={}", first.slug, second.slug);
    ensure!(
        derive_view(catalog, &query).selected() == Some(first),
        "`{query}` did not pick {}",
        first.slug
    );
    Ok(())
}

fn percent_decoding(_catalog: &Catalog) -> Result<()> {
    ensure!(
        slug_from_query("?game=dual%2Dn%2Dback").as_deref() == Some("dual-n-back"),
        "encoded hyphens were not decoded"
    );
    ensure!(
        slug_from_query("?game=a%20b").as_deref() == Some("a b"),
        "encoded space was not decoded"
    );
    Ok(())
}
