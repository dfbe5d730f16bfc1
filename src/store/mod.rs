//! Store Module
//!
//! Provides in-memory storage of user records keyed by id.

mod record;
mod user_store;


// Re-export public types
pub use record::UserRecord;
pub use user_store::UserStore;
