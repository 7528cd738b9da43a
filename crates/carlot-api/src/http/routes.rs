//! HTTP route definitions.
//!
//! ```text
//! GET  /cars        - List every car
//! POST /cars        - Create a car (JSON or form body)
//! GET  /clear-cars  - Delete every car
//!
//! GET  /health      - Health check with storage probe
//! GET  /livez       - Liveness probe
//! ```

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{clear_cars, create_car, list_cars};
use crate::http::monitoring;
use crate::state::AppState;

/// Create the main router with the shared application state.
pub fn create_router(state: Arc<AppState>) -> Router {
    let car_routes = Router::new()
        .route("/cars", get(list_cars))
        .route("/cars", post(create_car))
        .route("/clear-cars", get(clear_cars))
        .with_state(state.clone());

    // Monitoring routes (health, probes)
    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .with_state(state);

    // Liveness probe has no state dependency
    let liveness_route = Router::new().route("/livez", get(monitoring::liveness_probe));

    Router::new()
        .merge(car_routes)
        .merge(monitoring_routes)
        .merge(liveness_route)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
