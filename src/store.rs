//! SQLite store handle: database bootstrap, pooled connections, and seeding.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use crate::model::Pokemon;
use crate::service::validation::validate_new_id;
use crate::sql::{COUNT_POKEMON, INSERT_POKEMON, PING};
use sqlx::migrate::MigrateDatabase;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::path::Path;
use std::time::Duration;

const SQLITE_PROTOCOL: &str = "sqlite://";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handle to the `pokemon` database. Cloning is cheap; all clones share one pool.
#[derive(Clone, Debug)]
pub struct PokemonStore {
    pool: SqlitePool,
}

impl PokemonStore {
    pub fn new(pool: SqlitePool) -> Self {
        PokemonStore { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check out one connection for the duration of a request. It goes back to the
    /// pool when the returned guard is dropped, whichever way the handler exits.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, AppError> {
        Ok(self.pool.acquire().await?)
    }

    /// Round-trip a trivial statement on a pooled connection.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.acquire().await?;
        sqlx::query(PING).execute(&mut *conn).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create the SQLite database file if it does not exist yet.
pub async fn ensure_database_exists(path: &Path) -> Result<(), AppError> {
    let url = format!("{}{}", SQLITE_PROTOCOL, path.display());
    if !Sqlite::database_exists(&url).await? {
        tracing::info!(path = %path.display(), "creating database");
        Sqlite::create_database(&url).await?;
    }
    Ok(())
}

/// Open a pool on the database at `path` (WAL journal, busy timeout) and make sure the
/// schema exists.
pub async fn open(path: &Path, max_connections: u32) -> Result<PokemonStore, AppError> {
    ensure_database_exists(path).await?;
    let options = SqliteConnectOptions::new()
        .filename(path)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    crate::migration::apply_migrations(&pool).await?;
    tracing::info!(path = %path.display(), max_connections, "store ready");
    Ok(PokemonStore::new(pool))
}

pub async fn connect(config: &ServerConfig) -> Result<PokemonStore, AppError> {
    open(&config.database_path, config.max_connections).await
}

/// Load a JSON array of records into the table, but only when the table is empty.
/// Returns how many records were inserted.
pub async fn seed_from_file(store: &PokemonStore, path: &Path) -> Result<u64, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    let records: Vec<Pokemon> = serde_json::from_str(&raw)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    seed(store, &records).await
}

/// Records get the same id check as a create; one bad record rejects the whole batch.
pub async fn seed(store: &PokemonStore, records: &[Pokemon]) -> Result<u64, AppError> {
    for p in records {
        validate_new_id(p.id)?;
    }
    let mut tx = store.pool.begin().await?;
    let existing: i64 = sqlx::query_scalar(COUNT_POKEMON).fetch_one(&mut *tx).await?;
    if existing > 0 {
        tracing::info!(existing, "store already populated, skipping seed");
        return Ok(0);
    }
    let mut inserted = 0;
    for p in records {
        sqlx::query(INSERT_POKEMON)
            .bind(p.id)
            .bind(p.number)
            .bind(&p.name)
            .bind(&p.sprite)
            .execute(&mut *tx)
            .await?;
        inserted += 1;
    }
    tx.commit().await?;
    tracing::info!(inserted, "seeded store");
    Ok(inserted)
}
