//! Logic-only scenarios over the core crate.

use folio_core::effects::StyleVar;
use folio_core::validation::is_valid_email;
use folio_core::{
    AccessibilitySettings, Captcha, ControlState, MemoryStore, PresentationFlag, RestoreOutcome,
    SliderControl, Theme, compute_effects, keys,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use regex::Regex;

use super::{LogicCheck, TestScenario};
use crate::logic::{CheckError, PageHarness, PageKind, expect_eq, random_settings};

#[derive(Debug, Clone, Copy)]
pub struct CatalogScenario {
    pub key: &'static str,
    pub description: &'static str,
    name: &'static str,
    checks: &'static [LogicCheck],
}

impl CatalogScenario {
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn to_test_scenario(&self) -> TestScenario {
        self.checks
            .iter()
            .fold(TestScenario::new(self.name), |scenario, check| {
                scenario.with_check(*check)
            })
    }
}

pub const CATALOG: [CatalogScenario; 6] = [
    CatalogScenario {
        key: "settings-reset",
        description: "Reset clears overrides, controls and the stored record",
        name: "Settings Reset",
        checks: &[reset_leaves_nothing_to_restore],
    },
    CatalogScenario {
        key: "malformed-records",
        description: "Corrupt or out-of-range records change nothing on load",
        name: "Malformed Records",
        checks: &[malformed_records_are_ignored],
    },
    CatalogScenario {
        key: "unapplied-record",
        description: "Records never confirmed through the panel stay dormant",
        name: "Unapplied Record",
        checks: &[unapplied_record_stays_dormant],
    },
    CatalogScenario {
        key: "partial-panel",
        description: "Pages missing some controls still restore what they carry",
        name: "Partial Panel",
        checks: &[partial_panel_restores_present_controls],
    },
    CatalogScenario {
        key: "style-formats",
        description: "Style variables use the formats the stylesheet expects",
        name: "Style Variable Formats",
        checks: &[style_vars_are_well_formed],
    },
    CatalogScenario {
        key: "widget-logic",
        description: "Captcha answers, theme resolution and email validation",
        name: "Widget Logic",
        checks: &[
            captcha_answers_check,
            theme_resolution_is_consistent,
            email_validation_matches_field_rules,
        ],
    },
];

pub fn find_catalog_scenario(key: &str) -> Option<CatalogScenario> {
    CATALOG.iter().copied().find(|scenario| scenario.key == key)
}

fn reset_leaves_nothing_to_restore(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let harness = PageHarness::new();
    let page = harness.open(PageKind::SettingsPanel);
    page.apply(&random_settings(&mut rng));
    page.reset();

    if !page.surface().presentation().is_pristine() {
        return Err(CheckError::Violated(format!(
            "reset left overrides: {:?}",
            page.surface().presentation()
        )));
    }
    expect_eq(
        "font size read-out after reset",
        &Some(ControlState::Text("100%".into())),
        &page.surface().control(SliderControl::FontSize.output_id()),
    )?;
    expect_eq(
        "stored record after reset",
        &false,
        &harness.storage().contains(keys::A11Y_SETTINGS),
    )?;

    let next = harness.open(PageKind::Bare);
    expect_eq("restore after reset", &RestoreOutcome::Absent, &next.restore())?;
    expect_eq("announcements on load", &0, &next.announcer().count())
}

fn corrupt(record: &str, rng: &mut ChaCha20Rng) -> String {
    match rng.gen_range(0..4) {
        0 => record[..rng.gen_range(0..record.len())].to_string(),
        1 => record.replacen("\"fontSize\"", "\"fontSizeX\"", 1),
        2 => {
            let size = if rng.gen_bool(0.5) { 79 } else { 201 };
            record.replacen("\"fontSize\":", &format!("\"fontSize\":{size},\"_\":"), 1)
        }
        _ => record.replacen("\"lineHeight\":", "\"lineHeight\":-1,\"_\":", 1),
    }
}

fn malformed_records_are_ignored(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let record = random_settings(&mut rng)
        .with_applied(true)
        .to_json()
        .map_err(|err| CheckError::Violated(err.to_string()))?;
    let raw = corrupt(&record, &mut rng);

    let harness =
        PageHarness::with_storage(MemoryStore::new().with_entry(keys::A11Y_SETTINGS, &raw));
    let page = harness.open(PageKind::SettingsPanel);

    expect_eq(
        &format!("restore of {raw:?}"),
        &RestoreOutcome::Malformed,
        &page.restore(),
    )?;
    if !page.surface().presentation().is_pristine() {
        return Err(CheckError::Violated(format!("{raw:?} changed the page")));
    }
    expect_eq(
        "font size slider",
        &Some(ControlState::Value("100".into())),
        &page.surface().control(SliderControl::FontSize.input_id()),
    )?;
    expect_eq("announcements", &0, &page.announcer().count())
}

fn unapplied_record_stays_dormant(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let record = random_settings(&mut rng)
        .to_json()
        .map_err(|err| CheckError::Violated(err.to_string()))?;
    let harness =
        PageHarness::with_storage(MemoryStore::new().with_entry(keys::A11Y_SETTINGS, &record));

    let page = harness.open(PageKind::SettingsPanel);
    expect_eq("restore", &RestoreOutcome::NotApplied, &page.restore())?;
    if !page.surface().presentation().is_pristine() {
        return Err(CheckError::Violated("unapplied record changed the page".into()));
    }
    expect_eq(
        "stored record kept",
        &Some(record),
        &harness.storage().raw(keys::A11Y_SETTINGS),
    )
}

fn partial_panel_restores_present_controls(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let settings = random_settings(&mut rng);
    let harness = PageHarness::new();
    harness.open(PageKind::SettingsPanel).apply(&settings);

    let page = harness.open(PageKind::CheckboxesOnly);
    expect_eq("restore", &RestoreOutcome::Restored, &page.restore())?;
    for flag in PresentationFlag::ALL {
        expect_eq(
            flag.checkbox_id(),
            &Some(ControlState::Checked(flag.enabled_in(&settings))),
            &page.surface().control(flag.checkbox_id()),
        )?;
        expect_eq(
            flag.class_name(),
            &flag.enabled_in(&settings),
            &page.surface().has_flag(flag.class_name()),
        )?;
    }
    expect_eq(
        "slider created on a page without one",
        &None,
        &page.surface().control(SliderControl::FontSize.input_id()),
    )?;

    let effects = compute_effects(&settings);
    for var in StyleVar::ALL {
        expect_eq(
            var.property(),
            &effects.style_var(var).map(str::to_string),
            &page.surface().style_var(var.property()),
        )?;
    }
    Ok(())
}

fn style_vars_are_well_formed(seed: u64) -> Result<(), CheckError> {
    let unitless = Regex::new(r"^\d+(\.\d+)?$").map_err(|e| CheckError::Violated(e.to_string()))?;
    let pixels = Regex::new(r"^\d+(\.\d+)?px$").map_err(|e| CheckError::Violated(e.to_string()))?;

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    for settings in [AccessibilitySettings::default(), random_settings(&mut rng)] {
        let effects = compute_effects(&settings);
        for var in StyleVar::ALL {
            let value = effects.style_var(var).unwrap_or_default();
            let pattern = match var {
                StyleVar::FontSizeMultiplier | StyleVar::LineHeight => &unitless,
                StyleVar::LetterSpacing | StyleVar::FocusThickness => &pixels,
            };
            if !pattern.is_match(value) {
                return Err(CheckError::Violated(format!(
                    "{} = {value:?} does not match {}",
                    var.property(),
                    pattern.as_str()
                )));
            }
        }
    }
    Ok(())
}

fn captcha_answers_check(seed: u64) -> Result<(), CheckError> {
    let question = Regex::new(r"^(10|[1-9]) [+\-×] (10|[1-9])$")
        .map_err(|e| CheckError::Violated(e.to_string()))?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    for _ in 0..32 {
        let captcha = Captcha::generate(&mut rng);
        let text = captcha.question();
        if !question.is_match(&text) {
            return Err(CheckError::Violated(format!("unexpected question {text:?}")));
        }
        let answer = captcha.answer();
        expect_eq(&format!("{text} accepts {answer}"), &true, &captcha.check(&answer.to_string()))?;
        expect_eq(
            &format!("{text} accepts padded {answer}"),
            &true,
            &captcha.check(&format!("  {answer}abc")),
        )?;
        expect_eq(
            &format!("{text} rejects {}", answer + 1),
            &false,
            &captcha.check(&(answer + 1).to_string()),
        )?;
    }
    Ok(())
}

fn theme_resolution_is_consistent(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let prefers_dark = rng.gen_bool(0.5);
    let system = if prefers_dark { Theme::Dark } else { Theme::Light };

    expect_eq("no saved theme", &system, &Theme::resolve(None, prefers_dark))?;
    expect_eq(
        "unknown saved theme",
        &system,
        &Theme::resolve(Some("sepia"), prefers_dark),
    )?;
    for theme in [Theme::Light, Theme::Dark] {
        expect_eq(
            &format!("saved {}", theme.as_str()),
            &theme,
            &Theme::resolve(Some(theme.as_str()), prefers_dark),
        )?;
        expect_eq("double toggle", &theme, &theme.toggled().toggled())?;
    }
    Ok(())
}

fn email_validation_matches_field_rules(seed: u64) -> Result<(), CheckError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let user: String = (0..rng.gen_range(1..=12))
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect();
    let valid = format!("{user}@example.ru");
    expect_eq(&valid, &true, &is_valid_email(&valid))?;
    expect_eq("padded address", &true, &is_valid_email(&format!("  {valid} ")))?;
    for invalid in [user.clone(), format!("{user}@"), format!("@{user}.ru"), format!("{user} @x.ru")] {
        expect_eq(&invalid, &false, &is_valid_email(&invalid))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_checks_pass_for_a_spread_of_seeds() {
        folio_core::i18n::set_lang("ru");
        for scenario in CATALOG {
            let logic = scenario.to_test_scenario();
            for seed in [0, 1, 42, 1337, u64::MAX] {
                logic
                    .run(seed)
                    .unwrap_or_else(|err| panic!("{} seed {seed}: {err}", scenario.key));
            }
        }
    }

    #[test]
    fn corrupt_never_yields_the_original() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let record = AccessibilitySettings::default()
            .with_applied(true)
            .to_json()
            .expect("json");
        for _ in 0..50 {
            assert_ne!(corrupt(&record, &mut rng), record);
        }
    }

    #[test]
    fn find_catalog_scenario_by_key() {
        assert_eq!(
            find_catalog_scenario("widget-logic").map(|s| s.to_test_scenario().checks.len()),
            Some(3)
        );
        assert!(find_catalog_scenario("smoke").is_none());
    }
}
