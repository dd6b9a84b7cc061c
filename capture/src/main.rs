//! capture — log into a running instance of the app and save themed
//! screenshots of a fixed set of routes, for the documentation pages.
//!
//! Credentials and target come from the environment (`.env` supported):
//! `ADMIN_USER`, `ADMIN_PASSWORD`, `ADMIN_ID`, optional `ORIGIN` and
//! `ONLY_RECIPE`. Each route is captured in both themes, across a desktop
//! and a mobile device profile.

mod config;
mod profile;
mod routes;
mod session;

use anyhow::{anyhow, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::ClearBrowserCookiesParams;
use clap::Parser;
use futures::StreamExt;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "capture",
    about = "Capture themed documentation screenshots from a running app instance"
)]
struct Cli {
    /// Directory screenshots are written to
    #[arg(long, default_value = "docs/images")]
    out_dir: PathBuf,

    /// Stop after the first-recipe capture (same as ONLY_RECIPE=1)
    #[arg(long)]
    only_recipe: bool,

    /// Run the browser with a visible window, for debugging
    #[arg(long)]
    headful: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values win over already-set process variables.
    dotenvy::dotenv_override().ok();
    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    config.out_dir = cli.out_dir;
    if cli.only_recipe {
        config.only_recipe = true;
    }

    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!("failed to create output directory: {}", config.out_dir.display())
    })?;

    let mut builder = BrowserConfig::builder().window_size(1280, 800);
    if cli.headful {
        builder = builder.with_head();
    }
    let browser_config = builder.build().map_err(|e| anyhow!(e))?;

    let (mut browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("failed to launch browser")?;
    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    for device in [&profile::DESKTOP, &profile::MOBILE] {
        let page = browser.new_page("about:blank").await?;
        // Every profile pass starts logged out. A session cookie left over
        // from the previous pass would redirect the /login capture and break
        // the form fill.
        page.execute(ClearBrowserCookiesParams::default()).await?;
        device.apply(&page).await?;
        session::Session::new(&page, &config, device).run().await?;
    }

    browser.close().await?;
    let _ = handler_task.await;

    println!("✅ All screenshots captured with both themes.");
    Ok(())
}
