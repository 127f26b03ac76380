use anyhow::{Context, Result};
use event_loader::{LoadPolicy, DEFAULT_EVENTS_PATH};
use reqwest::Url;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub asset_base_url: Url,
    pub events_path: String,
    pub detail_load_policy: LoadPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port: u16 = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        // Pages fetch the asset from this same server unless told otherwise.
        let asset_base_url = var("ASSET_BASE_URL")
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", port));

        Ok(Self {
            port,
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
            asset_base_url: Url::parse(&asset_base_url)
                .with_context(|| format!("ASSET_BASE_URL must be a valid URL: {}", asset_base_url))?,
            events_path: var("EVENTS_PATH").unwrap_or_else(|| DEFAULT_EVENTS_PATH.to_string()),
            detail_load_policy: var("DETAIL_LOAD_POLICY")
                .unwrap_or_else(|| LoadPolicy::Propagate.to_string())
                .parse::<LoadPolicy>()
                .map_err(anyhow::Error::msg)
                .context("DETAIL_LOAD_POLICY must be 'resilient' or 'propagate'")?,
        })
    }
}
