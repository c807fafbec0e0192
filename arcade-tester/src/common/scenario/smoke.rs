use anyhow::{Result, ensure};
use arcade_core::{Catalog, FRAME_PERMISSIONS};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Check, PortalScenario, ScenarioCtx, session_at};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.page.accept_consent().await?;
        let menu = ctx
            .page
            .wait_for("menu to render", |page| page.showing_menu())
            .await?;
        let expected: Vec<&str> = ctx.catalog.iter().map(|g| g.slug.as_str()).collect();
        ensure!(
            menu.card_slugs == expected,
            "cards {:?} do not match catalog order {expected:?}",
            menu.card_slugs
        );
        if ctx.verbose {
            println!("  🃏 menu shows {} cards", menu.card_slugs.len());
        }

        let Some(game) = ctx.catalog.iter().next() else {
            return Ok(());
        };
        ctx.page.open_card(&game.slug).await?;
        let page = ctx
            .page
            .wait_for("player to open", |page| page.showing_frame(&game.url))
            .await?;
        ensure!(
            page.search == format!("?game={}", game.slug),
            "url query was `{}`",
            page.search
        );
        ensure!(
            page.frame_allow.as_deref() == Some(FRAME_PERMISSIONS),
            "frame permissions were {:?}",
            page.frame_allow
        );

        ctx.page.press_escape().await?;
        let page = ctx
            .page
            .wait_for("escape back to the menu", |page| page.showing_menu())
            .await?;
        ensure!(page.search.is_empty(), "root url kept query `{}`", page.search);
        Ok(())
    }
}

impl PortalScenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Smoke"
    }

    fn checks(&self) -> Vec<(&'static str, Check)> {
        vec![
            ("root shows the menu", root_shows_menu),
            ("first game opens and closes", open_and_close),
        ]
    }

    fn has_browser_half(&self) -> bool {
        true
    }
}

fn root_shows_menu(catalog: &Catalog) -> Result<()> {
    let session = session_at(catalog, "/");
    ensure!(session.view().is_menu(), "root derived {:?}", session.view());
    ensure!(session.lease().is_none(), "menu holds a game lease");
    Ok(())
}

fn open_and_close(catalog: &Catalog) -> Result<()> {
    let Some(game) = catalog.iter().next() else {
        return Ok(());
    };
    let mut session = session_at(catalog, "/");
    ensure!(session.select_slug(&game.slug), "{} did not open", game.slug);
    ensure!(session.lease().is_some(), "player holds no lease");
    session.back();
    ensure!(session.view().is_menu(), "back did not close the player");
    ensure!(session.lease().is_none(), "lease outlived the player");
    Ok(())
}
