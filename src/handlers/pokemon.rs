//! Pokemon handlers: list, read, create, update, delete, plus preflight and method fallback.

use crate::error::AppError;
use crate::extractors::PokemonId;
use crate::model::Pokemon;
use crate::response::{method_not_supported, success_many, success_one};
use crate::service::{PokemonService, INVALID_ID_MESSAGE};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::Value;

/// Bodies must be JSON objects. A derived struct would also accept a positional array.
fn decode_body(body: &Bytes) -> Result<Pokemon, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("malformed request body: {}", e)))?;
    if !value.is_object() {
        return Err(AppError::BadRequest("request body must be a JSON object".into()));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("malformed request body: {}", e)))
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("pokemon {} not found", id))
}

/// GET /pokemon
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    let rows = PokemonService::list(&mut conn).await?;
    Ok(success_many(rows))
}

/// GET /pokemon/:id
pub async fn read(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    PokemonService::ensure_in_range(&mut conn, id).await?;
    let row = PokemonService::read(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(success_one(row))
}

/// POST /pokemon
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let candidate = decode_body(&body)?;
    let mut conn = state.store.acquire().await?;
    let row = PokemonService::create(&mut conn, &candidate).await?;
    tracing::info!(id = row.id, name = %row.name, "pokemon created");
    Ok(success_one(row))
}

/// PATCH /pokemon/:id. Every non-key field is replaced; omitted fields become zero values.
pub async fn update(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    PokemonService::ensure_in_range(&mut conn, id).await?;
    let replacement = decode_body(&body)?;
    let row = PokemonService::update(&mut conn, id, &replacement)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "pokemon updated");
    Ok(success_one(row))
}

/// DELETE /pokemon/:id. An in-range id with no row is still reported as success.
pub async fn delete(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.acquire().await?;
    PokemonService::ensure_in_range(&mut conn, id).await?;
    let removed = PokemonService::delete(&mut conn, id).await?;
    tracing::info!(id, removed, "pokemon delete");
    Ok(StatusCode::OK)
}

/// `/pokemon/` with an empty id segment.
pub async fn missing_id() -> AppError {
    AppError::BadRequest(INVALID_ID_MESSAGE.into())
}

/// OPTIONS on any pokemon route. The CORS layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn unsupported_method(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::warn!(%method, path = %uri.path(), "method not supported");
    method_not_supported()
}
