use anyhow::Result;
use arcade_core::{Catalog, MemoryHistory, MemoryMetadata, PortalSession};
use thirtyfour::prelude::*;

use crate::browser::PageInspector;

pub mod catalog_integrity;
pub mod deep_links;
pub mod navigation;
pub mod player_controls;
pub mod seo_handoff;
pub mod smoke;

/// Origin used for canonical URLs in headless checks.
pub const LOGIC_ORIGIN: &str = "https://arcade.example.com";

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub catalog: &'a Catalog,
    pub page: PageInspector<'a>,
    pub verbose: bool,
}

/// One named assertion against a catalog.
pub type Check = fn(&Catalog) -> Result<()>;

#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

/// A scenario with a headless half and, optionally, a browser half.
pub trait PortalScenario: BrowserScenario + Send + Sync {
    fn name(&self) -> &'static str;

    fn checks(&self) -> Vec<(&'static str, Check)>;

    fn has_browser_half(&self) -> bool {
        false
    }
}

/// Scenario made only of headless checks.
pub struct LogicScenario {
    name: &'static str,
    checks: Vec<(&'static str, Check)>,
}

impl LogicScenario {
    pub const fn new(name: &'static str, checks: Vec<(&'static str, Check)>) -> Self {
        Self { name, checks }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser half", self.name)
    }
}

impl PortalScenario for LogicScenario {
    fn name(&self) -> &'static str {
        self.name
    }

    fn checks(&self) -> Vec<(&'static str, Check)> {
        self.checks.clone()
    }
}

/// Headless portal opened at `url`, with the catalog's title and subtitle as the shell metadata.
pub fn session_at<'a>(
    catalog: &'a Catalog,
    url: &str,
) -> PortalSession<'a, MemoryHistory, MemoryMetadata> {
    PortalSession::start(
        catalog,
        MemoryHistory::starting_at(url),
        MemoryMetadata::new(&catalog.title, &catalog.subtitle),
        LOGIC_ORIGIN,
    )
}

/// Scenario keys in the order `all` expands to.
pub const ALL_SCENARIOS: [&str; 6] = [
    "catalog-integrity",
    "deep-links",
    "navigation",
    "seo-handoff",
    "player-controls",
    "smoke",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn PortalScenario>> {
    match name.to_lowercase().as_str() {
        "catalog-integrity" | "catalog" => Some(Box::new(catalog_integrity::scenario())),
        "deep-links" | "deep-link" => Some(Box::new(deep_links::DeepLinkScenario)),
        "navigation" | "nav" => Some(Box::new(navigation::scenario())),
        "seo-handoff" | "seo" => Some(Box::new(seo_handoff::SeoHandoffScenario)),
        "player-controls" | "player" => Some(Box::new(player_controls::scenario())),
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("catalog-integrity", "Catalog entries are unique, linkable and playable"),
        ("deep-links", "?game=<slug> opens the player; unknown slugs show the menu"),
        ("navigation", "Select, back and history traversal keep URL and view in sync"),
        ("seo-handoff", "Page metadata follows the open game and is restored on exit"),
        ("player-controls", "Escape, reload, header drawer and load-stall rules"),
        ("smoke", "Menu renders, a game opens and closes"),
        ("all", "Every scenario above"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for key in ALL_SCENARIOS {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} missing"));
            assert!(!scenario.checks().is_empty(), "{key} has no checks");
        }
        assert!(get_scenario("bogus").is_none());
    }

    #[test]
    fn browser_halves_exist_where_advertised() {
        let with_browser: Vec<&str> = ALL_SCENARIOS
            .into_iter()
            .filter(|key| get_scenario(key).is_some_and(|s| s.has_browser_half()))
            .collect();
        assert_eq!(with_browser, vec!["deep-links", "seo-handoff", "smoke"]);
    }

    #[test]
    fn all_logic_checks_pass_on_shipped_catalog() {
        let catalog = crate::logic::shipped_catalog().unwrap();
        for key in ALL_SCENARIOS {
            let scenario = get_scenario(key).unwrap();
            for (label, check) in scenario.checks() {
                check(&catalog).unwrap_or_else(|err| panic!("{key}/{label}: {err:#}"));
            }
        }
    }
}
