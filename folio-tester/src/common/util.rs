use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

const STATE_SNAPSHOT: &str = r"return {
    storage: Object.assign({}, window.localStorage),
    bodyClasses: Array.from(document.body ? document.body.classList : []),
    rootStyle: document.documentElement.getAttribute('style'),
    liveRegion: (document.getElementById('a11y-live-region') || {}).textContent || null
};";

/// Accessibility-relevant page state captured when a browser scenario fails.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageState {
    pub storage: BTreeMap<String, String>,
    pub body_classes: Vec<String>,
    pub root_style: Option<String>,
    pub live_region: Option<String>,
}

impl PageState {
    /// Short human summary appended to `error.txt`.
    #[must_use]
    pub fn summary(&self) -> String {
        let keys: Vec<&str> = self.storage.keys().map(String::as_str).collect();
        format!(
            "stored keys: [{}]\nbody classes: [{}]\nroot style: {}\nlive region: {}",
            keys.join(", "),
            self.body_classes.join(" "),
            self.root_style.as_deref().unwrap_or("-"),
            self.live_region.as_deref().unwrap_or("-"),
        )
    }
}

/// Everything a failed browser run leaves behind.
#[derive(Debug, Default)]
struct FailureArtifacts {
    screenshot: Option<Vec<u8>>,
    dom: Option<String>,
    state: Option<PageState>,
    error_chain: String,
}

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/seed-{seed}/{ts}")
}

async fn read_page_state(driver: &WebDriver) -> Option<PageState> {
    let ret = driver.execute(STATE_SNAPSHOT, vec![]).await.ok()?;
    match serde_json::from_value(ret.json().clone()) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("unreadable page state snapshot: {err}");
            None
        }
    }
}

pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let artifacts = FailureArtifacts {
        screenshot: driver.screenshot_as_png().await.ok(),
        dom: driver.source().await.ok(),
        state: read_page_state(driver).await,
        error_chain: format!("{err:#}"),
    };
    artifacts.write_to(Path::new(dir))
}

impl FailureArtifacts {
    fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;

        if let Some(png) = &self.screenshot {
            fs::write(dir.join("screenshot.png"), png).context("writing screenshot")?;
        }
        if let Some(dom) = &self.dom {
            fs::write(dir.join("dom.html"), dom).context("writing dom snapshot")?;
        }

        let mut report = self.error_chain.clone();
        if let Some(state) = &self.state {
            let payload = serde_json::to_vec_pretty(state).context("encoding page state")?;
            fs::write(dir.join("page-state.json"), payload).context("writing page state")?;
            report.push_str("\n\n");
            report.push_str(&state.summary());
        }
        fs::write(dir.join("error.txt"), report).context("writing error report")?;

        log::info!("wrote failure artifacts to {}", dir.display());
        Ok(())
    }
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
    use folio_core::keys;
    use serde_json::json;

    fn scratch_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "folio-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(
            split_csv(" smoke, ,settings-persistence,  chrome "),
            vec!["smoke", "settings-persistence", "chrome"]
        );
    }

    #[test]
    fn artifacts_dir_nests_browser_scenario_and_seed() {
        let dir = artifacts_dir("target/out", "firefox", "cookie-rejection", 7);
        assert!(dir.starts_with("target/out/firefox/cookie-rejection/seed-7/"));
    }

    #[test]
    fn snapshot_shape_decodes_into_page_state() {
        let raw = json!({
            "storage": { (keys::A11Y_SETTINGS): "{\"applied\":true}", (keys::THEME): "dark" },
            "bodyClasses": ["theme-dark", "high-contrast"],
            "rootStyle": "--font-size-multiplier: 1.5;",
            "liveRegion": null
        });
        let state: PageState = serde_json::from_value(raw).expect("page state");
        assert_eq!(state.storage.get(keys::THEME).map(String::as_str), Some("dark"));
        assert_eq!(state.body_classes, vec!["theme-dark", "high-contrast"]);
        assert_eq!(state.root_style.as_deref(), Some("--font-size-multiplier: 1.5;"));
        assert_eq!(state.live_region, None);
    }

    #[test]
    fn bare_page_snapshot_falls_back_to_defaults() {
        let state: PageState =
            serde_json::from_value(json!({ "bodyClasses": [] })).expect("page state");
        assert_eq!(state, PageState::default());
        assert!(state.summary().contains("root style: -"));
    }

    #[test]
    fn failure_report_carries_state_summary() {
        let base = scratch_dir();
        let mut state = PageState {
            body_classes: vec!["grayscale".to_string()],
            live_region: Some("Настройки применены".to_string()),
            ..PageState::default()
        };
        state
            .storage
            .insert(keys::COOKIES_ACCEPTED.to_string(), "false".to_string());
        let artifacts = FailureArtifacts {
            dom: Some("<html />".to_string()),
            state: Some(state.clone()),
            error_chain: "cookie notice shown again after rejection".to_string(),
            ..FailureArtifacts::default()
        };
        artifacts.write_to(&base).expect("write artifacts");

        assert!(!base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        let written: PageState = serde_json::from_slice(
            &std::fs::read(base.join("page-state.json")).expect("state file"),
        )
        .expect("state json");
        assert_eq!(written, state);

        let report = std::fs::read_to_string(base.join("error.txt")).expect("error file");
        assert!(report.starts_with("cookie notice shown again after rejection"));
        assert!(report.contains(&format!("stored keys: [{}]", keys::COOKIES_ACCEPTED)));
        assert!(report.contains("body classes: [grayscale]"));
        assert!(report.contains("live region: Настройки применены"));
    }

    #[test]
    fn failure_without_state_writes_only_the_error() {
        let base = scratch_dir();
        FailureArtifacts {
            error_chain: "boom".to_string(),
            ..FailureArtifacts::default()
        }
        .write_to(&base)
        .expect("write artifacts");

        assert!(!base.join("page-state.json").exists());
        assert_eq!(
            std::fs::read_to_string(base.join("error.txt")).expect("error file"),
            "boom"
        );
    }
}
