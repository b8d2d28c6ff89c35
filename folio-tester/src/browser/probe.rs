use anyhow::{Result, bail};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads and seeds page state through injected scripts.
#[derive(Debug, Clone)]
pub struct PageProbe<'a> {
    driver: &'a WebDriver,
}

impl<'a> PageProbe<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn clear_storage(&self) -> Result<()> {
        self.driver
            .execute("window.localStorage.clear()", vec![])
            .await?;
        Ok(())
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.driver
            .execute(
                "window.localStorage.setItem(arguments[0], arguments[1])",
                vec![key.into(), value.into()],
            )
            .await?;
        Ok(())
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let result = self
            .driver
            .execute(
                "return window.localStorage.getItem(arguments[0])",
                vec![key.into()],
            )
            .await?;
        Ok(result.json().as_str().map(str::to_string))
    }

    /// Inline custom property on `<html>`, empty when unset.
    pub async fn style_var(&self, property: &str) -> Result<String> {
        let result = self
            .driver
            .execute(
                "return document.documentElement.style.getPropertyValue(arguments[0])",
                vec![property.into()],
            )
            .await?;
        Ok(result.json().as_str().unwrap_or_default().trim().to_string())
    }

    pub async fn body_classes(&self) -> Result<Vec<String>> {
        let result = self
            .driver
            .execute("return Array.from(document.body.classList)", vec![])
            .await?;
        Ok(result
            .json()
            .as_array()
            .map(|classes| {
                classes
                    .iter()
                    .filter_map(|class| class.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Wait until the page script has put one of `classes` on `<body>`.
    pub async fn wait_for_body_class(&self, classes: &[&str], timeout: Duration) -> Result<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let present = self.body_classes().await?;
            if let Some(found) = classes
                .iter()
                .find(|class| present.iter().any(|p| p == *class))
            {
                return Ok((*found).to_string());
            }
            if Instant::now() >= deadline {
                bail!("none of {classes:?} appeared on <body> within {timeout:?}, saw {present:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn html_lang(&self) -> Result<String> {
        let result = self
            .driver
            .execute("return document.documentElement.lang || ''", vec![])
            .await?;
        Ok(result.json().as_str().unwrap_or_default().to_string())
    }
}
