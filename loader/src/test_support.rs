use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use reqwest::Url;
use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::error::LoadError;
use crate::fetch::{Fetch, FetchResponse};

/// Canned behaviour for [`FakeFetcher`].
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this status and raw body text.
    Body(u16, String),
    /// Fail before any response exists.
    Unreachable(String),
}

impl Reply {
    pub fn json(status: u16, value: Value) -> Self {
        Reply::Body(status, value.to_string())
    }
}

/// In-memory fetch capability that records requested paths.
#[derive(Debug, Clone)]
pub struct FakeFetcher {
    reply: Reply,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for FakeFetcher {
    type Response = FakeResponse;

    async fn fetch(&self, path: &str) -> Result<FakeResponse, LoadError> {
        self.requests.lock().unwrap().push(path.to_string());
        match &self.reply {
            Reply::Body(status, body) => Ok(FakeResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Unreachable(reason) => Err(LoadError::Fetch(reason.clone())),
        }
    }
}

pub struct FakeResponse {
    status: u16,
    body: String,
}

impl FetchResponse for FakeResponse {
    fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn status(&self) -> u16 {
        self.status
    }

    async fn json(self) -> Result<Value, LoadError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

struct ErrorCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install a thread-local subscriber that counts error-level events.
pub fn capture_errors() -> (DefaultGuard, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));
    (tracing::subscriber::set_default(subscriber), count)
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_asset_server(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{}", addr)).unwrap()
}
