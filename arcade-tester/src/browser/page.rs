use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thirtyfour::prelude::*;

/// Everything a scenario asserts on, read in one script round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub title: String,
    pub description: Option<String>,
    pub structured_data: Option<Value>,
    pub seo_content: Option<String>,
    pub frame_src: Option<String>,
    pub frame_allow: Option<String>,
    pub has_menu: bool,
    pub card_slugs: Vec<String>,
    pub search: String,
    #[serde(default)]
    pub consent_open: bool,
}

impl PageSnapshot {
    pub fn showing_menu(&self) -> bool {
        self.has_menu && self.frame_src.is_none()
    }

    /// The wasm bundle has mounted and drawn either view.
    pub fn app_rendered(&self) -> bool {
        self.has_menu || self.frame_src.is_some()
    }

    /// Rendered with no dialog covering the page.
    pub fn ready_for_input(&self) -> bool {
        self.app_rendered() && !self.consent_open
    }

    pub fn showing_frame(&self, url: &str) -> bool {
        !self.has_menu && self.frame_src.as_deref() == Some(url)
    }

    /// `@type` of the structured-data document, or of its first `@graph` node.
    pub fn structured_data_type(&self) -> Option<&str> {
        let doc = self.structured_data.as_ref()?;
        doc.get("@type")
            .or_else(|| doc.get("@graph")?.get(0)?.get("@type"))
            .and_then(Value::as_str)
    }
}

const SNAPSHOT_SCRIPT: &str = r#"
const meta = document.querySelector("meta[name='description']");
const data = document.getElementById('structured-data');
const hidden = document.getElementById('seo-content');
const frame = document.querySelector('iframe');
let parsed = null;
try {
  parsed = data && data.textContent ? JSON.parse(data.textContent) : null;
} catch (e) {
  parsed = null;
}
return {
  title: document.title,
  description: meta ? meta.getAttribute('content') : null,
  structured_data: parsed,
  seo_content: hidden ? hidden.innerHTML : null,
  frame_src: frame ? frame.getAttribute('src') : null,
  frame_allow: frame ? frame.getAttribute('allow') : null,
  has_menu: !!document.querySelector('.menu__grid, .menu__empty'),
  card_slugs: Array.from(document.querySelectorAll('.game-card')).map((c) => c.dataset.slug),
  search: window.location.search,
  consent_open: !!document.querySelector('.modal[role="dialog"]'),
};
"#;

const ESCAPE_SCRIPT: &str =
    "document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape', bubbles: true }));";

const ACCEPT_SELECTOR: &str = ".privacy__accept";

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const POLL_ATTEMPTS: u32 = 40;

/// Read-mostly view of the portal page in a live browser.
#[derive(Debug, Clone)]
pub struct PageInspector<'a> {
    driver: &'a WebDriver,
}

impl<'a> PageInspector<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub const fn driver(&self) -> &'a WebDriver {
        self.driver
    }

    pub async fn snapshot(&self) -> Result<PageSnapshot> {
        let ret = self.driver.execute(SNAPSHOT_SCRIPT, vec![]).await?;
        serde_json::from_value(ret.json().clone()).context("parsing page snapshot")
    }

    /// Poll until `ready` holds; the app renders only after its wasm bundle loads.
    pub async fn wait_for<F>(&self, what: &str, ready: F) -> Result<PageSnapshot>
    where
        F: Fn(&PageSnapshot) -> bool + Send,
    {
        let mut last = PageSnapshot::default();
        for _ in 0..POLL_ATTEMPTS {
            last = self.snapshot().await?;
            if ready(&last) {
                return Ok(last);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        bail!("timed out waiting for {what}; last page state: {last:?}")
    }

    /// A fresh profile has no stored consent, so the privacy dialog opens
    /// over the page on first load. Accepting it persists for the session.
    pub async fn accept_consent(&self) -> Result<()> {
        let page = self
            .wait_for("portal to render", PageSnapshot::app_rendered)
            .await?;
        if !page.consent_open {
            return Ok(());
        }
        self.driver
            .find(By::Css(ACCEPT_SELECTOR))
            .await
            .context("consent dialog has no accept button")?
            .click()
            .await?;
        self.wait_for("consent dialog to close", PageSnapshot::ready_for_input)
            .await?;
        log::debug!("accepted privacy dialog");
        Ok(())
    }

    pub async fn open_card(&self, slug: &str) -> Result<()> {
        if self.snapshot().await?.consent_open {
            bail!("privacy dialog covers the menu; accept it before opening `{slug}`");
        }
        let selector = format!(".game-card[data-slug='{slug}']");
        self.driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("no card for `{slug}`"))?
            .click()
            .await?;
        Ok(())
    }

    pub async fn press_escape(&self) -> Result<()> {
        self.driver.execute(ESCAPE_SCRIPT, vec![]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_parses_script_payload() {
        let payload = json!({
            "title": "THE PLAYGROUND",
            "description": null,
            "structured_data": { "@graph": [{ "@type": "BreadcrumbList" }] },
            "seo_content": null,
            "frame_src": "https://imposter.example.com",
            "frame_allow": "fullscreen",
            "has_menu": false,
            "card_slugs": [],
            "search": "?game=imposter"
        });
        let snap: PageSnapshot = serde_json::from_value(payload).unwrap();
        assert!(snap.showing_frame("https://imposter.example.com"));
        assert!(!snap.showing_menu());
        assert_eq!(snap.structured_data_type(), Some("BreadcrumbList"));
    }

    #[test]
    fn menu_snapshot_reports_item_list() {
        let snap = PageSnapshot {
            has_menu: true,
            structured_data: Some(json!({ "@type": "ItemList" })),
            ..PageSnapshot::default()
        };
        assert!(snap.showing_menu());
        assert_eq!(snap.structured_data_type(), Some("ItemList"));
    }

    #[test]
    fn open_consent_dialog_blocks_input() {
        let payload = json!({
            "title": "THE PLAYGROUND",
            "description": null,
            "structured_data": null,
            "seo_content": null,
            "frame_src": null,
            "frame_allow": null,
            "has_menu": true,
            "card_slugs": ["dual-n-back"],
            "search": "",
            "consent_open": true
        });
        let snap: PageSnapshot = serde_json::from_value(payload).unwrap();
        assert!(snap.app_rendered());
        assert!(!snap.ready_for_input());

        let accepted = PageSnapshot {
            consent_open: false,
            ..snap
        };
        assert!(accepted.ready_for_input());
    }

    #[test]
    fn unmounted_page_is_not_ready() {
        let snap = PageSnapshot::default();
        assert!(!snap.app_rendered());
        assert!(!snap.ready_for_input());
    }
}
