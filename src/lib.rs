//! User Library - A small in-memory user record service
//!
//! Create, update, and list user records keyed by a caller-supplied id.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::{UserRecord, UserStore};
