//! Extract the numeric pokemon id from the trailing path segment.

use crate::error::AppError;
use crate::service::{parse_id, INVALID_ID_MESSAGE};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Identifier taken from `/pokemon/:id`. Anything that is not a base-10 integer is
/// rejected with a client error before the store is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PokemonId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PokemonId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.into()))?;
        parse_id(&raw).map(PokemonId)
    }
}
