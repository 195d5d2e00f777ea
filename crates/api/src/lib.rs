//! HTTP API answering aggregate queries over license sales records.
//!
//! Provides the four query endpoints plus health and Prometheus metrics,
//! with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use query::{QueryEngine, QueryOptions};
use record_store::RecordLoader;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::sales::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<L: RecordLoader + 'static>(
    state: Arc<AppState<L>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<L>))
        .route("/total_items", get(routes::sales::total_items::<L>))
        .route(
            "/nth_most_total_item",
            get(routes::sales::nth_most_total_item::<L>),
        )
        .route(
            "/percentage_of_department_wise_sold_items",
            get(routes::sales::percentage_of_department_wise_sold_items::<L>),
        )
        .route("/monthly_sales", get(routes::sales::monthly_sales::<L>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a record loader.
pub fn create_state<L: RecordLoader + 'static>(
    loader: L,
    options: QueryOptions,
) -> Arc<AppState<L>> {
    Arc::new(AppState {
        engine: QueryEngine::new(loader, options),
    })
}
