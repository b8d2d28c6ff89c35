use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::PageProbe;
use crate::logic::CheckError;

pub mod catalog;
pub mod consent;
pub mod persistence;
pub mod smoke;

use catalog::{CatalogScenario, find_catalog_scenario};
use consent::CookieRejectionScenario;
use persistence::SettingsPersistenceScenario;
use smoke::SmokeScenario;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub probe: PageProbe<'a>,
    pub verbose: bool,
}

/// One seeded run of a check against in-memory pages.
pub type LogicCheck = fn(u64) -> Result<(), CheckError>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub checks: Vec<LogicCheck>,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_check(mut self, check: LogicCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Run every check for one seed, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn run(&self, seed: u64) -> Result<(), CheckError> {
        self.checks.iter().try_for_each(|check| check(seed))
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario: Send + Sync {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

const COMBINED: [(&str, &str); 3] = [
    ("smoke", "Site boots: empty storage restores nothing, page script marks the theme"),
    (
        "settings-persistence",
        "Applied settings survive navigation to another page",
    ),
    (
        "cookie-rejection",
        "Rejecting cookies purges settings and draft and hides the notice",
    ),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    COMBINED
        .iter()
        .copied()
        .chain(catalog::CATALOG.iter().map(|entry| (entry.key, entry.description)))
        .collect()
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario>> {
    match name {
        "smoke" => Some(Box::new(SmokeScenario)),
        "settings-persistence" => Some(Box::new(SettingsPersistenceScenario)),
        "cookie-rejection" => Some(Box::new(CookieRejectionScenario)),
        other => find_catalog_scenario(other).map(|s| Box::new(s) as Box<dyn CombinedScenario>),
    }
}

/// Every scenario key, for `--scenarios all`.
pub fn all_scenario_keys() -> Vec<String> {
    list_scenarios()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect()
}

#[async_trait::async_trait]
impl BrowserScenario for CatalogScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{}: browser testing not implemented for this scenario", self.key())
    }
}

impl CombinedScenario for CatalogScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(self.to_test_scenario())
    }
}
