use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thirtyfour::prelude::*;

use super::smoke::BOOT_TIMEOUT;
use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::logic::{CheckError, PageHarness, PageKind, expect_eq, random_settings};
use folio_core::{
    ControlState, PresentationFlag, RestoreOutcome, SliderControl, StyleVar, Theme,
    compute_effects, keys,
};

pub struct SettingsPersistenceScenario;

#[async_trait::async_trait]
impl BrowserScenario for SettingsPersistenceScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(ctx.seed);
        let settings = random_settings(&mut rng).with_applied(true);
        let record = settings.to_json().context("encoding settings record")?;

        driver.goto(&ctx.base_url).await?;
        ctx.probe.clear_storage().await?;
        ctx.probe.set_item(keys::A11Y_SETTINGS, &record).await?;
        driver.refresh().await?;
        ctx.probe
            .wait_for_body_class(
                &[Theme::Light.body_class(), Theme::Dark.body_class()],
                BOOT_TIMEOUT,
            )
            .await?;

        let effects = compute_effects(&settings);
        for var in StyleVar::ALL {
            let expected = effects.style_var(var).unwrap_or_default();
            let actual = ctx.probe.style_var(var.property()).await?;
            anyhow::ensure!(
                actual == expected,
                "{} should be {expected:?} after reload, got {actual:?}",
                var.property()
            );
        }

        let classes = ctx.probe.body_classes().await?;
        for flag in PresentationFlag::ALL {
            let present = classes.iter().any(|c| c == flag.class_name());
            anyhow::ensure!(
                present == flag.enabled_in(&settings),
                "body class {} is {} after reload",
                flag.class_name(),
                if present { "present" } else { "missing" }
            );
        }

        if ctx.verbose {
            println!("  💾 Restored {record}");
        }
        Ok(())
    }
}

impl CombinedScenario for SettingsPersistenceScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Settings Persistence").with_check(applied_settings_survive_navigation))
    }
}

fn applied_settings_survive_navigation(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let settings = random_settings(&mut rng);
    let harness = PageHarness::new();

    let first = harness.open(PageKind::SettingsPanel);
    first.apply(&settings);
    let applied = first.surface().presentation();

    let second = harness.open(PageKind::SettingsPanel);
    expect_eq("restore", &RestoreOutcome::Restored, &second.restore())?;
    expect_eq("presentation", &applied, &second.surface().presentation())?;
    for slider in SliderControl::ALL {
        expect_eq(
            slider.output_id(),
            &Some(ControlState::Text(slider.display(&settings))),
            &second.surface().control(slider.output_id()),
        )?;
    }
    expect_eq("restore announcements", &1, &second.announcer().count())?;

    let bare = harness.open(PageKind::Bare);
    expect_eq("bare page restore", &RestoreOutcome::Restored, &bare.restore())?;
    expect_eq("bare page presentation", &applied, &bare.surface().presentation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic_check_holds_across_seeds() {
        folio_core::i18n::set_lang("ru");
        let logic = SettingsPersistenceScenario
            .as_logic_scenario()
            .expect("logic scenario");
        for seed in 0..20 {
            logic.run(seed).unwrap_or_else(|err| panic!("seed {seed}: {err}"));
        }
    }
}
