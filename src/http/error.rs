//! HTTP error mapping for the interview API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::Error;

/// Wire shape for error responses: `{"error": "..."}`.
///
/// The browser client reads only the `error` field of a failed reply, so
/// every failure collapses onto this one shape.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was missing or malformed.
    BadRequest(String),
    /// Any other failure inside the service.
    Internal(String),
}

impl ApiError {
    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The client contract has a single error status: 500 with an
        // `error` string, regardless of which side was at fault.
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
