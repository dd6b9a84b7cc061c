//! Run configuration from the environment (after `.env` loading).
//!
//! Missing credentials or target identifier abort the run before the browser
//! launches. Everything else has a default.

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Values the capture run needs up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub user_id: String,
    pub origin: String,
    pub only_recipe: bool,
    pub out_dir: PathBuf,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup — keeps env parsing unit-testable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // An empty value counts as unset for the required keys.
        let required = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let username = required("ADMIN_USER");
        let password = required("ADMIN_PASSWORD");
        let (Some(username), Some(password)) = (username, password) else {
            bail!("Missing credentials: set ADMIN_USER and ADMIN_PASSWORD in your environment/.env");
        };
        let Some(user_id) = required("ADMIN_ID") else {
            bail!("Missing ADMIN_ID in your environment/.env");
        };
        let origin = lookup("ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let only_recipe = lookup("ONLY_RECIPE")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        Ok(Self {
            username,
            password,
            user_id,
            origin,
            only_recipe,
            out_dir: PathBuf::from("docs/images"),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "yes" | "on")
}
