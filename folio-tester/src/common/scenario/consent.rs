use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::smoke::BOOT_TIMEOUT;
use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{CheckError, PageHarness, PageKind, expect_eq};
use folio_core::draft::save_draft;
use folio_core::{
    AccessibilitySettings, ConsentDecision, ContactDraft, CookieConsent, RestoreOutcome,
    SiteConfig, keys,
};

const REJECT_BUTTON: &str = "reject-cookies";

pub struct CookieRejectionScenario;

#[async_trait::async_trait]
impl BrowserScenario for CookieRejectionScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let record = AccessibilitySettings::default()
            .with_applied(true)
            .to_json()
            .context("encoding settings record")?;

        driver.goto(&ctx.base_url).await?;
        ctx.probe.clear_storage().await?;
        ctx.probe.set_item(keys::A11Y_SETTINGS, &record).await?;
        ctx.probe
            .set_item(keys::CONTACT_DRAFT, r#"{"name":"Anna"}"#)
            .await?;
        driver.refresh().await?;

        let notice_delay =
            Duration::from_millis(u64::from(SiteConfig::default().cookie_notice_delay_ms));
        let reject = driver
            .query(By::Id(REJECT_BUTTON))
            .wait(BOOT_TIMEOUT + notice_delay, Duration::from_millis(200))
            .and_displayed()
            .first()
            .await
            .context("cookie notice never became visible")?;
        reject.click().await?;

        for key in [keys::A11Y_SETTINGS, keys::CONTACT_DRAFT] {
            let left = ctx.probe.get_item(key).await?;
            anyhow::ensure!(left.is_none(), "{key} survived rejection: {left:?}");
        }
        let flag = ctx.probe.get_item(keys::COOKIES_ACCEPTED).await?;
        anyhow::ensure!(
            flag.as_deref() == Some("false"),
            "{} should record the rejection, got {flag:?}",
            keys::COOKIES_ACCEPTED
        );

        driver.refresh().await?;
        tokio::time::sleep(notice_delay + Duration::from_millis(500)).await;
        let shown = driver
            .find(By::Id(REJECT_BUTTON))
            .await?
            .is_displayed()
            .await?;
        anyhow::ensure!(!shown, "cookie notice shown again after rejection");
        Ok(())
    }
}

impl CombinedScenario for CookieRejectionScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(
            TestScenario::new("Cookie Rejection")
                .with_check(rejection_purges_user_state)
                .with_check(acceptance_keeps_user_state),
        )
    }
}

fn seeded_harness(seed: u64) -> Result<PageHarness, CheckError> {
    let harness = PageHarness::new();
    let settings = AccessibilitySettings {
        high_contrast: seed % 2 == 0,
        ..AccessibilitySettings::default()
    };
    harness.open(PageKind::SettingsPanel).apply(&settings);
    let draft = ContactDraft {
        name: format!("visitor-{seed}"),
        ..ContactDraft::default()
    };
    save_draft(harness.storage(), &draft).map_err(|err| CheckError::Violated(err.to_string()))?;
    Ok(harness)
}

fn rejection_purges_user_state(seed: u64) -> Result<(), CheckError> {
    let harness = seeded_harness(seed)?;
    let consent = CookieConsent::new(harness.storage().clone());
    expect_eq("notice before deciding", &true, &consent.needs_notice())?;

    consent
        .reject()
        .map_err(|err| CheckError::Violated(err.to_string()))?;
    for key in [keys::A11Y_SETTINGS, keys::CONTACT_DRAFT] {
        expect_eq(key, &false, &harness.storage().contains(key))?;
    }
    expect_eq(
        "decision",
        &Some(ConsentDecision::Rejected),
        &consent.decision().unwrap_or(None),
    )?;
    expect_eq("notice after rejecting", &false, &consent.needs_notice())?;

    let next = harness.open(PageKind::SettingsPanel);
    expect_eq("restore after rejection", &RestoreOutcome::Absent, &next.restore())
}

fn acceptance_keeps_user_state(seed: u64) -> Result<(), CheckError> {
    let harness = seeded_harness(seed)?;
    let consent = CookieConsent::new(harness.storage().clone());
    consent
        .accept()
        .map_err(|err| CheckError::Violated(err.to_string()))?;

    for key in [
        keys::COOKIES_ACCEPTED,
        keys::COOKIES_FUNCTIONAL,
        keys::COOKIES_ANALYTICS,
        keys::COOKIES_MARKETING,
    ] {
        expect_eq(key, &Some("true".to_string()), &harness.storage().raw(key))?;
    }
    expect_eq(
        "draft kept",
        &true,
        &harness.storage().contains(keys::CONTACT_DRAFT),
    )?;
    let next = harness.open(PageKind::Bare);
    expect_eq("restore after accepting", &RestoreOutcome::Restored, &next.restore())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_checks_pass() {
        let logic = CookieRejectionScenario
            .as_logic_scenario()
            .expect("logic scenario");
        for seed in [1, 2, 99] {
            logic.run(seed).unwrap_or_else(|err| panic!("seed {seed}: {err}"));
        }
    }
}
