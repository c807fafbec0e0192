use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};

use crate::browser::{PageInspector, PageSnapshot};

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Save a screenshot, the DOM, the page snapshot and the error chain for a failed run.
pub async fn capture_artifacts(page: &PageInspector<'_>, dir: &str, err: &anyhow::Error) -> Result<()> {
    let driver = page.driver();
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let snapshot = page.snapshot().await.ok();
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        snapshot.as_ref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    snapshot: Option<&PageSnapshot>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }
    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }
    if let Some(snapshot) = snapshot {
        let payload = serde_json::to_vec_pretty(snapshot).unwrap_or_default();
        let _ = fs::write(dir.join("page.json"), payload);
    }
    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(
            split_csv(" smoke, ,deep-links,  navigation "),
            vec!["smoke", "deep-links", "navigation"]
        );
    }

    #[test]
    fn artifacts_dir_nests_browser_and_scenario() {
        let dir = artifacts_dir("target/out", "firefox", "seo-handoff");
        assert!(dir.starts_with("target/out/firefox/seo-handoff/"));
    }

    #[test]
    fn failed_run_leaves_page_state_behind() {
        let base = std::env::temp_dir().join(format!(
            "arcade-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let snapshot = PageSnapshot {
            title: String::from("THE PLAYGROUND"),
            has_menu: true,
            ..PageSnapshot::default()
        };
        write_artifact_files(&base, None, Some("<html />"), Some(&snapshot), "boom")
            .expect("write artifacts");

        assert!(!base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        let page = std::fs::read_to_string(base.join("page.json")).unwrap();
        assert!(page.contains("THE PLAYGROUND"));
        assert_eq!(std::fs::read_to_string(base.join("error.txt")).unwrap(), "boom");
    }
}
