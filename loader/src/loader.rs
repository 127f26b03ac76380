use std::fmt;
use std::str::FromStr;

use shared::{EventDocument, LoadResult};

use crate::error::LoadError;
use crate::fallback::Fallback;
use crate::fetch::{Fetch, FetchResponse};

pub const DEFAULT_EVENTS_PATH: &str = "/events.json";

/// How a load failure reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the failure and return an empty list.
    #[default]
    Resilient,
    /// Return the failure as an error.
    ///
    /// The status is still checked: a non-success response is an error
    /// even when its body happens to carry an `events` array.
    Propagate,
}

impl LoadPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPolicy::Resilient => "resilient",
            LoadPolicy::Propagate => "propagate",
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resilient" => Ok(LoadPolicy::Resilient),
            "propagate" => Ok(LoadPolicy::Propagate),
            other => Err(format!(
                "unknown load policy '{}' (expected 'resilient' or 'propagate')",
                other
            )),
        }
    }
}

/// Fetch `path` and extract its `events` array, surfacing every failure.
pub async fn try_load_events<F: Fetch>(fetch: &F, path: &str) -> Result<LoadResult, LoadError> {
    let response = fetch.fetch(path).await?;
    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
        });
    }

    let body = response.json().await?;
    let document: EventDocument = serde_json::from_value(body)?;

    tracing::debug!(path, count = document.events.len(), "Loaded events");
    Ok(document.into())
}

/// Fetch `path` and extract its `events` array. Never fails: any error is
/// logged once and an empty list returned.
pub async fn load_events<F: Fetch>(fetch: &F, path: &str) -> LoadResult {
    try_load_events(fetch, path)
        .await
        .or_fallback("Error loading events")
}

/// A fetch capability bound to the location of `events.json`.
///
/// Every call fetches fresh; nothing is cached between loads.
#[derive(Debug, Clone)]
pub struct EventLoader<F> {
    fetcher: F,
    path: String,
}

impl<F: Fetch> EventLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            path: DEFAULT_EVENTS_PATH.to_string(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resilient load.
    pub async fn load(&self) -> LoadResult {
        load_events(&self.fetcher, &self.path).await
    }

    /// Propagating load.
    pub async fn try_load(&self) -> Result<LoadResult, LoadError> {
        try_load_events(&self.fetcher, &self.path).await
    }

    /// Load under `policy`. Under [`LoadPolicy::Resilient`] this is always `Ok`.
    pub async fn load_with(&self, policy: LoadPolicy) -> Result<LoadResult, LoadError> {
        match policy {
            LoadPolicy::Resilient => Ok(self.load().await),
            LoadPolicy::Propagate => self.try_load().await,
        }
    }
}
