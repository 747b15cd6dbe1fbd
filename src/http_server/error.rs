//! # API Errors
//!
//! Error type for the REST surface. Invalid client-supplied arguments map to
//! 400, execution failures to 500; both carry the standard `result = false`
//! envelope so consumers always parse one shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::{ServiceDataResult, Validation};
use crate::query::QueryError;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // Client errors (400)
    /// Invalid query parameter
    #[error("invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Invalid request body
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    // Server errors (500)
    /// Data-access failure
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidQueryParam(_) | ApiError::InvalidBody(_) => {
                "Failed to read request arguments"
            }
            ApiError::Query(_) => "Data request failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ServiceDataResult::<serde_json::Value>::failed(
            self.message(),
            vec![Validation::message(self.to_string())],
        );
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            ApiError::InvalidQueryParam("limit".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("bad json".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_query_errors_map_to_500() {
        assert_eq!(
            ApiError::Query(QueryError::ChannelClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
