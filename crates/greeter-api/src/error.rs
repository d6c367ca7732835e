//! Error responses.
//!
//! Callers only learn whether a request succeeded. Every failure is a 500
//! whose body is the error message as a JSON string.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use greeter_solana_client::GreeterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(String),

    #[error(transparent)]
    Greeter(#[from] GreeterError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        tracing::error!(error = %msg, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(msg)).into_response()
    }
}
