use anyhow::{Result, ensure};
use arcade_core::{Catalog, HistoryPort};

use super::{LogicScenario, session_at};

pub fn scenario() -> LogicScenario {
    LogicScenario::new(
        "Navigation",
        vec![
            ("select pushes ?game=<slug>", select_pushes_query),
            ("back returns to the bare root", back_returns_home),
            ("history traversal never pushes", traversal_does_not_push),
            ("unknown slug selection is ignored", unknown_selection_ignored),
        ],
    )
}

fn select_pushes_query(catalog: &Catalog) -> Result<()> {
    for game in catalog.iter() {
        let mut session = session_at(catalog, "/");
        session.select(game);
        let query = session.history().location_query();
        ensure!(
            query == format!("?game={}", game.slug),
            "selecting {} left query `{query}`",
            game.slug
        );
        ensure!(session.history().len() == 2, "select should push exactly once");
        ensure!(
            session.view().selected() == Some(game),
            "view did not follow selection"
        );
    }
    Ok(())
}

fn back_returns_home(catalog: &Catalog) -> Result<()> {
    let Some(game) = catalog.iter().next() else {
        return Ok(());
    };
    let mut session = session_at(catalog, "/");
    session.select(game);
    session.back();
    ensure!(
        session.history().current() == "/",
        "back left url `{}`",
        session.history().current()
    );
    ensure!(session.view().is_menu(), "back did not show the menu");
    ensure!(
        session.metadata().title == catalog.title,
        "back left title `{}`",
        session.metadata().title
    );
    Ok(())
}

fn traversal_does_not_push(catalog: &Catalog) -> Result<()> {
    let Some(game) = catalog.iter().next() else {
        return Ok(());
    };
    let mut session = session_at(catalog, "/");
    session.select(game);
    let entries = session.history().len();

    ensure!(session.history_mut().go_back(), "no entry to go back to");
    session.on_history_navigation();
    ensure!(session.view().is_menu(), "popstate to root kept the player");

    ensure!(session.history_mut().go_forward(), "no entry to go forward to");
    session.on_history_navigation();
    ensure!(
        session.view().selected() == Some(game),
        "popstate forward did not reopen {}",
        game.slug
    );
    ensure!(
        session.history().len() == entries,
        "history traversal pushed entries"
    );
    Ok(())
}

fn unknown_selection_ignored(catalog: &Catalog) -> Result<()> {
    let mut session = session_at(catalog, "/");
    ensure!(
        !session.select_slug("not-a-real-slug"),
        "unknown slug opened a game"
    );
    ensure!(session.history().len() == 1, "unknown slug pushed history");
    Ok(())
}
