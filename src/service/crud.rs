//! Pokemon CRUD against one checked-out SQLite connection.

use crate::error::AppError;
use crate::model::Pokemon;
use crate::service::validation::{check_range, validate_new_id};
use crate::sql::{
    DELETE_POKEMON, GET_POKEMON, INSERT_POKEMON, LIST_POKEMON, MAX_POKEMON_ID, POKEMON_EXISTS,
    UPDATE_POKEMON,
};
use sqlx::SqliteConnection;

pub struct PokemonService;

impl PokemonService {
    /// All rows, ascending by id.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Pokemon>, AppError> {
        tracing::debug!(sql = %LIST_POKEMON, "query");
        let rows = sqlx::query_as::<_, Pokemon>(LIST_POKEMON)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Largest stored id, or None when the table is empty.
    pub async fn max_id(conn: &mut SqliteConnection) -> Result<Option<i64>, AppError> {
        tracing::debug!(sql = %MAX_POKEMON_ID, "query");
        let max: Option<i64> = sqlx::query_scalar(MAX_POKEMON_ID)
            .fetch_one(&mut *conn)
            .await?;
        Ok(max)
    }

    /// Reject ids outside `[1, MAX(id)]`; an empty table has no upper bound.
    pub async fn ensure_in_range(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
        let max = Self::max_id(conn).await?;
        check_range(id, max)
    }

    pub async fn read(conn: &mut SqliteConnection, id: i64) -> Result<Option<Pokemon>, AppError> {
        tracing::debug!(sql = %GET_POKEMON, id, "query");
        let row = sqlx::query_as::<_, Pokemon>(GET_POKEMON)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Insert a new record. An existing row with the same id is a conflict and is left untouched.
    pub async fn create(
        conn: &mut SqliteConnection,
        candidate: &Pokemon,
    ) -> Result<Pokemon, AppError> {
        validate_new_id(candidate.id)?;
        tracing::debug!(sql = %POKEMON_EXISTS, id = candidate.id, "query");
        let existing = sqlx::query(POKEMON_EXISTS)
            .bind(candidate.id)
            .fetch_optional(&mut *conn)
            .await?;
        if existing.is_some() {
            return Err(already_exists(candidate.id));
        }
        tracing::debug!(sql = %INSERT_POKEMON, id = candidate.id, "execute");
        sqlx::query(INSERT_POKEMON)
            .bind(candidate.id)
            .bind(candidate.number)
            .bind(&candidate.name)
            .bind(&candidate.sprite)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                // Another request inserted the same id between the existence check and the insert.
                if is_unique_violation(&e) {
                    already_exists(candidate.id)
                } else {
                    AppError::Db(e)
                }
            })?;
        Ok(candidate.clone())
    }

    /// Overwrite every non-key field of row `id`. Returns None when no row has that id.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        replacement: &Pokemon,
    ) -> Result<Option<Pokemon>, AppError> {
        tracing::debug!(sql = %UPDATE_POKEMON, id, "execute");
        let result = sqlx::query(UPDATE_POKEMON)
            .bind(replacement.number)
            .bind(&replacement.name)
            .bind(&replacement.sprite)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Pokemon {
            id,
            ..replacement.clone()
        }))
    }

    /// Delete row `id`. Returns whether a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_POKEMON, id, "execute");
        let result = sqlx::query(DELETE_POKEMON)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn already_exists(id: i64) -> AppError {
    AppError::Conflict(format!("pokemon {} already exists", id))
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => {
            db.is_unique_violation() || db.message().contains("UNIQUE constraint failed")
        }
        _ => false,
    }
}
