//! API Handlers
//!
//! HTTP request handlers for each user service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use crate::error::{Result, UserError};
use crate::models::{CreationRequest, HealthResponse};
use crate::store::UserStore;

/// Application state shared across all handlers.
///
/// Contains the user store wrapped in Arc<RwLock<>>. Writers hold the lock
/// across the existence check and the mutation.
#[derive(Clone, Default)]
pub struct AppState {
    /// Thread-safe user store
    pub store: Arc<RwLock<UserStore>>,
}

impl AppState {
    /// Creates a new AppState with the given user store.
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Handler for POST /users
///
/// Validates the payload and stores it if the id is free.
/// Responds with the new id.
pub async fn create_user_handler(State(state): State<AppState>, body: Bytes) -> Result<Json<i32>> {
    let req = CreationRequest::from_body(&body)?;

    if let Some(reason) = req.validate() {
        return Err(UserError::ValidationFailure(reason));
    }

    // Hold the write lock across check and insert
    let mut store = state.store.write().await;
    if req.user_exists(&store) {
        return Err(UserError::Conflict(req.id));
    }
    let id = store.create_user(req.into());

    info!(id, "User created");
    Ok(Json(id))
}

/// Handler for PUT /users
///
/// Replaces every field of an existing user. The payload is not validated.
/// Responds with the id.
pub async fn update_user_handler(State(state): State<AppState>, body: Bytes) -> Result<Json<i32>> {
    let req = CreationRequest::from_body(&body)?;

    let mut store = state.store.write().await;
    if !req.user_exists(&store) {
        return Err(UserError::NotFound(req.id));
    }
    let id = store.update_user(req.into())?;

    info!(id, "User updated");
    Ok(Json(id))
}

/// Handler for GET /users
///
/// Returns all users ordered by id as an indented JSON array.
pub async fn list_users_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.store.read().await.list_all_users();
    debug!(count = users.len(), "Listing users");

    let body =
        serde_json::to_string_pretty(&users).map_err(|e| UserError::Internal(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
