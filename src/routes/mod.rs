//! Router assembly: pokemon collection, operational routes, and the shared middleware stack.

pub mod operational;
pub mod pokemon;

pub use operational::operational_routes;
pub use pokemon::{pokemon_routes, COLLECTION_PATH};

use crate::error::ConfigError;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// CORS for a single frontend origin, matching the methods the route table serves.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
        key: "CORS_ALLOWED_ORIGIN",
        value: origin.to_string(),
    })?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Full application router.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(operational_routes(state.clone()))
        .merge(pokemon_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES)),
        )
}
