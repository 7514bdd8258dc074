//! Response helpers. Success bodies are the bare record or array, not an envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const METHOD_NOT_SUPPORTED: &str = "Sorry this method is not supported";

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

/// Plain-text 400 for methods the route table does not handle.
pub fn method_not_supported() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, METHOD_NOT_SUPPORTED)
}
