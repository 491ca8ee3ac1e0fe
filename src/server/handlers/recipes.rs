// src/server/handlers/recipes.rs
//! CRUD handlers for the recipe resource

use crate::error::Error;
use crate::server::ServerState;
use crate::server::payload::{self, RecipeBody, RecipePayload};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Query parameters for recipe listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-sensitive substring filter on the recipe name
    pub name: Option<String>,
}

/// List all recipes, newest first
///
/// GET /recipes/ and GET /recipes/?name=X
pub async fn list_recipes(
    State(state): State<Arc<RwLock<ServerState>>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;

    // An absent or empty name parameter applies no filter
    let filter = query.name.as_deref().filter(|needle| !needle.is_empty());

    match state.store.list(filter) {
        Ok(records) => {
            let body: Vec<RecipeBody> = records.into_iter().map(RecipeBody::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Create a recipe with its ingredients
///
/// POST /recipes/
pub async fn create_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    request: Result<Json<RecipePayload>, JsonRejection>,
) -> Response {
    let state = state.read().await;

    let result = parse_body(request)
        .and_then(payload::validate_create)
        .and_then(|new| state.store.create(new));

    match result {
        Ok(record) => {
            info!("Created recipe {} ({})", record.id, record.name);
            (StatusCode::CREATED, Json(RecipeBody::from(record))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Fetch a single recipe
///
/// GET /recipes/:id/
pub async fn retrieve_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(id): Path<i64>,
) -> Response {
    let state = state.read().await;

    match state.store.find_by_id(id) {
        Ok(Some(record)) => (StatusCode::OK, Json(RecipeBody::from(record))).into_response(),
        Ok(None) => error_response(Error::NotFound(format!("recipe {id}"))),
        Err(e) => error_response(e),
    }
}

/// Apply a partial update; a supplied ingredients list replaces the set
///
/// PATCH /recipes/:id/
pub async fn update_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(id): Path<i64>,
    request: Result<Json<RecipePayload>, JsonRejection>,
) -> Response {
    let state = state.read().await;

    let result = parse_body(request)
        .and_then(payload::validate_update)
        .and_then(|changes| state.store.update(id, changes));

    match result {
        Ok(Some(record)) => {
            info!("Updated recipe {}", record.id);
            (StatusCode::OK, Json(RecipeBody::from(record))).into_response()
        }
        Ok(None) => error_response(Error::NotFound(format!("recipe {id}"))),
        Err(e) => error_response(e),
    }
}

/// Delete a recipe and, by cascade, its ingredients
///
/// DELETE /recipes/:id/
pub async fn delete_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(id): Path<i64>,
) -> Response {
    let state = state.read().await;

    match state.store.delete(id) {
        Ok(true) => {
            info!("Deleted recipe {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => error_response(Error::NotFound(format!("recipe {id}"))),
        Err(e) => error_response(e),
    }
}

/// Unwrap a JSON body, turning a malformed or wrong-type payload into a
/// validation error so it maps to 400 like any other invalid field
fn parse_body(
    request: Result<Json<RecipePayload>, JsonRejection>,
) -> crate::Result<RecipePayload> {
    match request {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            let mut fields = std::collections::BTreeMap::new();
            fields.insert("body".to_string(), rejection.body_text());
            Err(Error::Validation(fields))
        }
    }
}

/// Map a domain error to an HTTP response
fn error_response(err: Error) -> Response {
    match err {
        Error::Validation(fields) => {
            let body = serde_json::json!({
                "error": "validation_failed",
                "fields": fields,
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Error::NotFound(what) => {
            let body = serde_json::json!({
                "error": "not_found",
                "message": format!("{} not found", what),
            });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        other => {
            tracing::error!("Request failed: {}", other);
            let body = serde_json::json!({
                "error": "internal",
                "message": format!("{}", other),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
