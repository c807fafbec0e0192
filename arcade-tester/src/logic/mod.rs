pub mod reports;
mod tester;

pub use tester::{LogicTester, ScenarioResult};

use anyhow::{Context, Result};
use arcade_core::Catalog;
use std::path::Path;

const SHIPPED_CATALOG: &str = include_str!("../../../arcade-web/static/catalog.json");

/// The catalog bundled into the web app.
pub fn shipped_catalog() -> Result<Catalog> {
    Catalog::from_json(SHIPPED_CATALOG).context("parsing bundled catalog.json")
}

/// Load `path` when given, otherwise the bundled catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return shipped_catalog();
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("validating catalog {}", path.display()))
}
