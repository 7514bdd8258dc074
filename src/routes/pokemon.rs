//! Route table for the pokemon collection.

use crate::handlers::pokemon::{
    create, delete as delete_handler, list, missing_id, preflight, read, unsupported_method, update,
};
use crate::state::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};

pub const COLLECTION_PATH: &str = "/pokemon";

/// `get` answers HEAD implicitly; only the listed methods are served here.
fn with_fallback(router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    router
        .head(unsupported_method)
        .options(preflight)
        .fallback(unsupported_method)
}

pub fn pokemon_routes(state: AppState) -> Router {
    Router::new()
        .route(COLLECTION_PATH, with_fallback(get(list).post(create)))
        .route(
            "/pokemon/",
            with_fallback(get(missing_id).patch(missing_id).delete(missing_id)),
        )
        .route(
            "/pokemon/:id",
            with_fallback(get(read).patch(update).delete(delete_handler)),
        )
        .with_state(state)
}
