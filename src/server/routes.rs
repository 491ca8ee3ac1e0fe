// src/server/routes.rs

//! Axum router configuration for the pantry server

use crate::server::ServerState;
use crate::server::handlers::recipes;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: Arc<RwLock<ServerState>>) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Recipe collection
        .route("/recipes/", get(recipes::list_recipes))
        .route("/recipes/", post(recipes::create_recipe))
        // Single recipe
        .route("/recipes/:id/", get(recipes::retrieve_recipe))
        .route("/recipes/:id/", patch(recipes::update_recipe))
        .route("/recipes/:id/", delete(recipes::delete_recipe))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::NamedTempFile;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let temp_file = NamedTempFile::new().unwrap();
        crate::db::init(temp_file.path()).unwrap();
        let config = crate::server::ServerConfig {
            db_path: temp_file.path().to_path_buf(),
            ..Default::default()
        };
        let state = Arc::new(RwLock::new(crate::server::ServerState::new(config)));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
