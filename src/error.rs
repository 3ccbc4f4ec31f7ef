//! Unified error type for the service.
//!
//! All failures surface through [`ApiError`], which maps onto the three
//! client-visible outcomes: 400 for rejected input, 429 for rate limiting,
//! 500 for anything internal. Internal detail is logged server-side and
//! never included in the response body.

use crate::classifier::ClassifierError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Generic message returned for any internal failure.
const INTERNAL_DETAIL: &str = "An error occurred while processing your request";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input (empty, whitespace-only, or oversized text).
    #[error("{0}")]
    Validation(String),

    /// Client exceeded its request budget for the current window.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The external classifier failed or timed out.
    #[error("classifier failure: {0}")]
    Classifier(#[from] ClassifierError),

    /// Unexpected internal fault.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Wire shape for all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Classifier(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ApiError::Validation(message) => message.clone(),
            ApiError::RateLimited => self.to_string(),
            ApiError::Classifier(_) | ApiError::Internal(_) => {
                // Log the specific cause; the client only sees a generic message.
                tracing::error!(error = %self, "request failed");
                INTERNAL_DETAIL.to_string()
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_taxonomy() {
        assert_eq!(
            ApiError::validation("empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
