use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval { start: String, end: String },
    #[error("Time window conflicts with booking {id} ({start}-{end})")]
    BookingConflict {
        id: String,
        start: String,
        end: String,
    },
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidTime(_) | AppError::InvalidInterval { .. } | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::BookingConflict { .. } | AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            // The colliding booking travels alongside the message so the
            // front desk can tell the resident what is in the way.
            AppError::BookingConflict { id, start, end } => json!({
                "error": self.to_string(),
                "conflicting_booking": {
                    "id": id,
                    "start_time": start,
                    "end_time": end,
                },
            }),
            AppError::Internal => {
                error!("Internal error surfaced to client");
                json!({ "error": "Internal error" })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
