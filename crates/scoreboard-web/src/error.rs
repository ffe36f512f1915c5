use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scoreboard_core::error::TrackerError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] TrackerError),

    #[error("Malformed form input: {0}")]
    Form(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!("Store Error: {}", e),
            AppError::Form(msg) => tracing::error!("Rejected submission: {}", msg),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
