//! Liveness, readiness and build info, outside the pokemon collection.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<Status> {
    Json(Status { status: "ok", database: None })
}

/// Ready once a pooled connection can run a statement. A closed or exhausted pool is 503.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Status>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(Status { status: "ok", database: Some("ok") })),
        Err(e) => {
            tracing::warn!(error = %e, "store not ready");
            let body = Status { status: "degraded", database: Some("unavailable") };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn operational_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
