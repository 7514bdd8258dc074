//! Pokedex server: loads configuration, opens the SQLite store, optionally seeds it,
//! and serves the pokemon routes.
//!
//! Run from repo root: `cargo run -p pokedex-server`

use pokedex_api::{app, connect, cors_layer, init_tracing, seed_from_file, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;
    init_tracing();

    let store = connect(&config).await?;
    if let Some(seed_path) = &config.seed_path {
        seed_from_file(&store, seed_path).await?;
    }

    let router = app(AppState::new(store.clone()), cors_layer(&config.cors_origin)?);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        database = %config.database_path.display(),
        cors_origin = %config.cors_origin,
        "listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}
