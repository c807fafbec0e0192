use arcade_core::Catalog;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::PortalScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub checks_passed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    /// Outcome of a browser run, which is one pass/fail unit.
    pub fn from_browser_run(name: String, outcome: Result<(), String>, duration: Duration) -> Self {
        let failures: Vec<String> = outcome.err().into_iter().collect();
        Self {
            scenario_name: name,
            passed: failures.is_empty(),
            checks_run: 1,
            checks_passed: usize::from(failures.is_empty()),
            failures,
            duration,
        }
    }
}

pub struct LogicTester<'a> {
    catalog: &'a Catalog,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(catalog: &'a Catalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub fn run_scenario(&self, scenario: &dyn PortalScenario) -> ScenarioResult {
        let start = Instant::now();
        let checks = scenario.checks();
        let mut failures = Vec::new();

        for (label, check) in &checks {
            match check(self.catalog) {
                Ok(()) => {
                    if self.verbose {
                        println!("  ✔ {} / {label}", scenario.name());
                    }
                }
                Err(err) => {
                    log::debug!("{} / {label} failed: {err:?}", scenario.name());
                    if self.verbose {
                        println!("  ✘ {} / {}", scenario.name(), label.red());
                    }
                    failures.push(format!("{label}: {err:#}"));
                }
            }
        }

        ScenarioResult {
            scenario_name: scenario.name().to_string(),
            passed: failures.is_empty(),
            checks_run: checks.len(),
            checks_passed: checks.len() - failures.len(),
            failures,
            duration: start.elapsed(),
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::{Check, LogicScenario};

    fn passing(_: &Catalog) -> anyhow::Result<()> {
        Ok(())
    }

    fn failing(_: &Catalog) -> anyhow::Result<()> {
        anyhow::bail!("nope")
    }

    #[test]
    fn collects_failures_per_check() {
        let checks: Vec<(&'static str, Check)> = vec![("ok", passing), ("broken", failing)];
        let scenario = LogicScenario::new("Mixed", checks);
        let catalog = Catalog::empty();
        let result = LogicTester::new(&catalog, false).run_scenario(&scenario);
        assert!(!result.passed);
        assert_eq!(result.checks_run, 2);
        assert_eq!(result.checks_passed, 1);
        assert_eq!(result.failures, vec!["broken: nope".to_string()]);
    }

    #[test]
    fn browser_failure_becomes_single_failed_check() {
        let result = ScenarioResult::from_browser_run(
            "Smoke [chrome]".into(),
            Err("menu never rendered".into()),
            Duration::from_millis(5),
        );
        assert!(!result.passed);
        assert_eq!(result.checks_passed, 0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration"], 5);
    }
}
