use event_loader::{EventLoader, HttpFetcher, LoadPolicy};

use crate::config::AppConfig;

/// Shared by every page-data handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub loader: EventLoader<HttpFetcher>,
    pub detail_policy: LoadPolicy,
}

impl AppState {
    pub fn new(loader: EventLoader<HttpFetcher>, detail_policy: LoadPolicy) -> Self {
        Self {
            loader,
            detail_policy,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let fetcher = HttpFetcher::new(config.asset_base_url.clone());
        let loader = EventLoader::new(fetcher).with_path(config.events_path.clone());
        Self::new(loader, config.detail_load_policy)
    }
}
