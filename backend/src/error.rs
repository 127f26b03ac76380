use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use event_loader::LoadError;
use shared::api::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The events asset could not be fetched or decoded
    #[error("{0}")]
    Load(#[from] LoadError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::Load(e) => {
                tracing::error!("Error loading events: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_details("Failed to load events", e.to_string()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
