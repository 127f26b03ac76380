//! The fetch capability the loader is given.
//!
//! [`Fetch`] maps a resource path to a response; [`FetchResponse`] exposes
//! the `ok` flag and an async JSON body. [`HttpFetcher`] is the reqwest
//! implementation used by the server; tests substitute in-memory fakes.

use reqwest::Url;
use serde_json::Value;

use crate::error::LoadError;

#[allow(async_fn_in_trait)]
pub trait Fetch {
    type Response: FetchResponse;

    /// Request `path`. An `Err` means no response was obtained at all.
    async fn fetch(&self, path: &str) -> Result<Self::Response, LoadError>;
}

#[allow(async_fn_in_trait)]
pub trait FetchResponse {
    /// Whether the status is in the success range.
    fn ok(&self) -> bool;

    fn status(&self) -> u16;

    /// Read and decode the body as JSON.
    async fn json(self) -> Result<Value, LoadError>;
}

/// Resolves paths against a base URL and GETs them over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

impl Fetch for HttpFetcher {
    type Response = HttpResponse;

    async fn fetch(&self, path: &str) -> Result<HttpResponse, LoadError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| LoadError::Fetch(format!("Invalid path {}: {}", path, e)))?;

        tracing::debug!(%url, "Fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        Ok(HttpResponse(response))
    }
}

pub struct HttpResponse(reqwest::Response);

impl FetchResponse for HttpResponse {
    fn ok(&self) -> bool {
        self.0.status().is_success()
    }

    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn json(self) -> Result<Value, LoadError> {
        let bytes = self
            .0
            .bytes()
            .await
            .map_err(|e| LoadError::Fetch(format!("Failed to read body: {}", e)))?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}
