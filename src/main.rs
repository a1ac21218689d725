//! Lifeboard - Game of Life board server.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use lifeboard::{
    AppState, BoardCache, BoardStore, ConwayEngine, MemoryBoardCache, MemoryBoardStore,
    SqliteBoardStore, router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store: Arc<dyn BoardStore> = if cli.memory {
        info!("Using in-memory board store");
        Arc::new(MemoryBoardStore::new())
    } else {
        info!(path = %cli.db_path, "Using SQLite board store");
        let store = SqliteBoardStore::new(cli.db_path.clone());
        store.run_migrations()?;
        Arc::new(store)
    };
    let cache: Arc<dyn BoardCache> = Arc::new(MemoryBoardCache::new());

    let state = AppState::new(store, cache, Arc::new(ConwayEngine::new()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Board server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
