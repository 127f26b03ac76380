use axum::{routing::get, Router};

use crate::handlers::{events, health};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Page data routes
        .route("/pages/events", get(events::list_events))
        .route("/pages/events/:event_id", get(events::get_event_page))
}
