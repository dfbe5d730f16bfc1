//! API Routes
//!
//! Configures the Axum router with all user service endpoints.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_user_handler, health_handler, list_users_handler, update_user_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /users` - Create a user
/// - `PUT /users` - Replace an existing user
/// - `GET /users` - List all users ordered by id
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit: disabled, so large but well-formed payloads are accepted
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/users",
            get(list_users_handler)
                .post(create_user_handler)
                .put(update_user_handler),
        )
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
