//! Apply the schema: a single `pokemon` table, created if missing.

use crate::error::AppError;
use crate::sql::CREATE_POKEMON_TABLE;
use sqlx::SqlitePool;

/// Idempotent; safe to call on every startup.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_POKEMON_TABLE).execute(pool).await?;
    Ok(())
}
