use thiserror::Error;

/// Everything that can go wrong between asking for `events.json` and
/// holding its `events` array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a response, or the body could not be read
    #[error("Request failed: {0}")]
    Fetch(String),

    /// A response arrived with a non-success status
    #[error("Failed to fetch events (status {status})")]
    Status { status: u16 },

    /// The body is not JSON, or has no `events` array
    #[error("Failed to parse events: {0}")]
    Parse(String),
}

impl LoadError {
    /// The resource could not be retrieved.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, LoadError::Fetch(_) | LoadError::Status { .. })
    }

    /// The resource was retrieved but could not be decoded.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, LoadError::Parse(_))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
