//! API error types with HTTP response mapping.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use query::QueryError;

/// Body returned for every failed request.
pub const GENERIC_ERROR: &str = "An error occurred";

/// API-level error type that maps to HTTP responses.
///
/// Every variant is answered with 500 and the same generic body; the detail
/// only reaches the log.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or unparsable query parameters.
    BadRequest(String),
    /// Query engine failure.
    Query(QueryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "rejected query parameters");
            }
            ApiError::Query(err) => {
                tracing::error!(error = %err, "query failed");
            }
        }
        metrics::counter!("api_errors_total").increment(1);

        let body = serde_json::json!({ "error": GENERIC_ERROR });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::Query(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_error_is_generic_500() {
        let errors = [
            ApiError::BadRequest("missing start_date".to_string()),
            ApiError::Query(QueryError::InvalidRank { n: 9, available: 2 }),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json, serde_json::json!({ "error": "An error occurred" }));
        }
    }
}
