use anyhow::Result;
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{CheckError, PageHarness, PageKind, expect_eq};
use folio_core::{RestoreOutcome, SiteConfig, Theme};

/// How long the wasm bundle gets to boot before the page counts as broken.
pub const BOOT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.probe.clear_storage().await?;
        driver.refresh().await?;

        let theme = ctx
            .probe
            .wait_for_body_class(
                &[Theme::Light.body_class(), Theme::Dark.body_class()],
                BOOT_TIMEOUT,
            )
            .await?;
        if ctx.verbose {
            println!("  🌐 Page booted with {theme}");
        }

        let lang = ctx.probe.html_lang().await?;
        anyhow::ensure!(!lang.is_empty(), "<html> has no lang attribute");

        for var in ["--font-size-multiplier", "--line-height"] {
            let value = ctx.probe.style_var(var).await?;
            anyhow::ensure!(
                value.is_empty(),
                "{var} set to {value:?} on a visit with empty storage"
            );
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(
            TestScenario::new("Smoke Test")
                .with_check(empty_storage_restores_nothing)
                .with_check(default_config_is_usable),
        )
    }
}

fn empty_storage_restores_nothing(_seed: u64) -> Result<(), CheckError> {
    let harness = PageHarness::new();
    for kind in PageKind::ALL {
        let page = harness.open(kind);
        expect_eq(&format!("{kind:?} restore"), &RestoreOutcome::Absent, &page.restore())?;
        if !page.surface().presentation().is_pristine() {
            return Err(CheckError::Violated(format!("{kind:?} page changed")));
        }
    }
    Ok(())
}

fn default_config_is_usable(_seed: u64) -> Result<(), CheckError> {
    let config = SiteConfig::load_from_static();
    if config.submit_delay_ms == 0 || config.announcement_clear_ms == 0 {
        return Err(CheckError::Violated(format!(
            "bundled timings must be positive: {config:?}"
        )));
    }
    expect_eq(
        "unparseable page overrides",
        &config,
        &SiteConfig::with_page_overrides(Some("{not json")),
    )
}
