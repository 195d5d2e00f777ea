//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use record_store::RecordLoader;
use serde::Serialize;

use super::sales::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}

/// GET /health — reports whether the sales data can be loaded.
pub async fn check<L: RecordLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.engine.loader().load().await {
        Ok(records) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                records: Some(records.len()),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check could not load sales data");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    records: None,
                }),
            )
        }
    }
}
