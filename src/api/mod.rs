//! API Module
//!
//! HTTP handlers and routing for the user service REST API.
//!
//! # Endpoints
//! - `POST /users` - Create a user
//! - `PUT /users` - Replace an existing user
//! - `GET /users` - List all users
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
