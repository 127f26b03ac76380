use axum::{
    extract::{Path, State},
    Json,
};
use shared::api::{EventListResponse, EventPageData};

use crate::error::ApiResult;
use crate::state::AppState;

/// Listing page data. Always degrades to an empty list.
pub async fn list_events(State(state): State<AppState>) -> Json<EventListResponse> {
    Json(state.loader.load().await)
}

/// Detail page data, loaded under the configured detail policy.
pub async fn get_event_page(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<EventPageData>> {
    tracing::debug!(%event_id, policy = %state.detail_policy, "Loading event page");

    let result = state.loader.load_with(state.detail_policy).await?;
    Ok(Json(EventPageData::new(event_id, result)))
}
