// src/server/mod.rs

//! Pantry HTTP server
//!
//! Exposes the recipe resource over HTTP:
//! - List/search, create, retrieve, update, and delete recipes
//! - Validation errors map to 400, unknown ids to 404
//! - Everything else (store failures) maps to 500

mod handlers;
mod payload;
mod routes;

pub use routes::create_router;

use crate::db::{RecipeStore, SqliteStore};
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the recipe database
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            db_path: PathBuf::from("pantry.db"),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub store: Box<dyn RecipeStore + Send + Sync>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        let store = SqliteStore::new(config.db_path.clone());
        Self {
            config,
            store: Box::new(store),
        }
    }
}

/// Start the pantry server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting pantry server on {}", config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);

    crate::db::init(&config.db_path)?;

    let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Pantry is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
