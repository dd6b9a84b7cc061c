//! One authenticated capture pass: login, then walk the route table taking
//! themed screenshots.

use crate::config::Config;
use crate::profile::DeviceProfile;
use crate::routes;
use anyhow::{bail, Context, Result};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use regex::Regex;
use std::time::Duration;

const THEME_TOGGLE_SELECTOR: &str = r#"button[aria-label="Toggle theme"]"#;
const RECIPE_LINK_SELECTOR: &str = "a.recipe-container";
const LOGIN_WAIT: Duration = Duration::from_secs(30);
const THEME_SETTLE: Duration = Duration::from_millis(500);

// Fallback when the page exposes no toggle control: flip the attribute the
// theme system keys off of.
const TOGGLE_THEME_JS: &str = r#"(() => {
  const html = document.documentElement;
  const next = html.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
  html.setAttribute('data-theme', next);
})()"#;

pub struct Session<'a> {
    page: &'a Page,
    config: &'a Config,
    profile: &'a DeviceProfile,
}

impl<'a> Session<'a> {
    pub fn new(page: &'a Page, config: &'a Config, profile: &'a DeviceProfile) -> Self {
        Self {
            page,
            config,
            profile,
        }
    }

    /// Full capture sequence for one device profile.
    pub async fn run(&self) -> Result<()> {
        let origin = &self.config.origin;

        // Login page, pre-auth.
        self.capture_both_themes(&format!("{}/login", origin), "login")
            .await?;

        self.login().await?;

        // Recipe list (wherever login landed us).
        let list_url = self
            .page
            .url()
            .await?
            .context("page has no URL after login")?;
        self.capture_both_themes(&list_url, "list").await?;

        self.capture_first_recipe().await?;

        if self.config.only_recipe {
            // Short-circuit if we only want the recipe view.
            return Ok(());
        }

        for target in routes::PAGES_TO_CAPTURE {
            if target.name == "login" {
                continue;
            }
            let url = routes::expand_route(origin, target.route, &self.config.user_id);
            self.capture_both_themes(&url, target.name).await?;
        }

        Ok(())
    }

    /// Submit the login form and wait for the recipe list URL.
    async fn login(&self) -> Result<()> {
        self.page
            .find_element(r#"input[name="username"]"#)
            .await
            .context("login form: username input not found")?
            .click()
            .await?
            .type_str(&self.config.username)
            .await?;
        self.page
            .find_element(r#"input[name="password"]"#)
            .await
            .context("login form: password input not found")?
            .click()
            .await?
            .type_str(&self.config.password)
            .await?;
        self.page
            .find_element(r#"button[type="submit"]"#)
            .await
            .context("login form: submit button not found")?
            .click()
            .await?;

        let pattern = routes::recipe_list_pattern(&self.config.origin)?;
        self.wait_for_url(&pattern, LOGIN_WAIT).await?;
        tokio::time::sleep(THEME_SETTLE).await;
        Ok(())
    }

    /// Follow the first recipe link, if any. A missing link is a warning,
    /// not an error — a fresh instance may have no recipes yet.
    async fn capture_first_recipe(&self) -> Result<()> {
        let link = match self.page.find_element(RECIPE_LINK_SELECTOR).await {
            Ok(link) => link,
            Err(_) => {
                eprintln!("⚠️ No recipe link found, skipping first-recipe capture");
                return Ok(());
            }
        };
        let Some(href) = link.attribute("href").await? else {
            eprintln!("⚠️ Recipe link has no href, skipping first-recipe capture");
            return Ok(());
        };
        let url = format!("{}{}", self.config.origin, href);
        self.capture_both_themes(&url, "first-recipe").await
    }

    /// Navigate to a URL and screenshot it under the current theme and the
    /// toggled one.
    async fn capture_both_themes(&self, url: &str, page_name: &str) -> Result<()> {
        println!("📸 Navigating to {}", url);
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        // Give late asset loads a moment to settle.
        tokio::time::sleep(THEME_SETTLE).await;

        // Capture twice: current theme, then toggled.
        for _ in 0..2 {
            let theme = self.current_theme().await;
            let file_name = routes::image_name(self.profile.prefix, page_name, &theme);
            let path = self.config.out_dir.join(&file_name);
            println!("🖼️ Capturing {}", file_name);
            self.page
                .save_screenshot(
                    ScreenshotParams::builder()
                        .format(CaptureScreenshotFormat::Png)
                        .build(),
                    &path,
                )
                .await
                .with_context(|| format!("failed to capture {}", path.display()))?;

            self.toggle_theme().await?;
            tokio::time::sleep(THEME_SETTLE).await;
        }
        Ok(())
    }

    /// Current `data-theme` attribute, defaulting to `light`.
    async fn current_theme(&self) -> String {
        let theme: Option<String> = match self
            .page
            .evaluate("document.documentElement.getAttribute('data-theme')")
            .await
        {
            Ok(result) => result.into_value().unwrap_or(None),
            Err(_) => None,
        };
        theme.unwrap_or_else(|| "light".to_string())
    }

    /// Click the theme toggle; fall back to flipping the attribute when the
    /// control is absent on this page.
    async fn toggle_theme(&self) -> Result<()> {
        match self.page.find_element(THEME_TOGGLE_SELECTOR).await {
            Ok(button) => {
                button.click().await?;
            }
            Err(_) => {
                eprintln!("⚠️ Theme toggle not found, switching data-theme directly");
                self.page.evaluate(TOGGLE_THEME_JS).await?;
            }
        }
        Ok(())
    }

    /// Poll the page URL until it matches `pattern` or the deadline passes.
    async fn wait_for_url(&self, pattern: &Regex, timeout: Duration) -> Result<String> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Some(url) = self.page.url().await? {
                if pattern.is_match(&url) {
                    return Ok(url);
                }
            }
            if tokio::time::Instant::now() >= deadline {
                bail!("timed out waiting for URL matching {}", pattern);
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    }
}
