//! Pokedex API: a CRUD REST backend for one `pokemon` table in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::Pokemon;
pub use routes::{app, cors_layer, operational_routes, pokemon_routes};
pub use service::PokemonService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, open, seed, seed_from_file, PokemonStore};
pub use telemetry::init_tracing;
