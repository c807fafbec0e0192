use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "arcade-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_arcade-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("deep-links"));
}

#[test]
fn cli_logic_run_reports_every_scenario_as_json() {
    let exe = env!("CARGO_BIN_EXE_arcade-tester");
    let output_path = temp_path("logic.json");
    let status = Command::new(exe)
        .args(["--mode", "logic", "--scenarios", "all", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let results = results.as_array().expect("array of results");
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_rejects_catalog_with_duplicate_slugs() {
    let exe = env!("CARGO_BIN_EXE_arcade-tester");
    let catalog_path = temp_path("dupes.json");
    std::fs::write(
        &catalog_path,
        r#"{"games": [
            {"id": "a", "slug": "same", "title": "A", "description": "", "category": "Fun", "url": "https://a.example.com"},
            {"id": "b", "slug": "same", "title": "B", "description": "", "category": "Fun", "url": "https://b.example.com"}
        ]}"#,
    )
    .expect("write catalog");
    let output = Command::new(exe)
        .args(["--mode", "logic", "--catalog"])
        .arg(&catalog_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("same"), "stderr: {stderr}");
}

#[test]
fn cli_runs_with_unknown_browser() {
    let exe = env!("CARGO_BIN_EXE_arcade-tester");
    let output = Command::new(exe)
        .args(["--mode", "browser", "--browsers", "unknown", "--scenarios", "smoke"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
}
