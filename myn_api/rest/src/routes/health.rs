use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use myn_core_health_contracts::HealthService;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let status = service.health().await;
    let code = if status.ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status)).into_response()
}
