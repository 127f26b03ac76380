use serde::{Deserialize, Serialize};

use crate::models::{Event, LoadResult};

// ============================================================================
// Page Data Types
// ============================================================================

/// Listing page payload.
pub type EventListResponse = LoadResult;

/// Detail page payload. The route parameter is echoed back next to the
/// full collection; selecting the matching event is left to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPageData {
    pub event_id: String,
    pub events: Vec<Event>,
}

impl EventPageData {
    pub fn new(event_id: impl Into<String>, result: LoadResult) -> Self {
        Self {
            event_id: event_id.into(),
            events: result.events,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
