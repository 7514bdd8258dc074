//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "pokedex_api=info,tower_http=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
