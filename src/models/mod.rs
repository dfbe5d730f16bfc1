//! Request and Response models for the user service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreationRequest, GENDER_FEMALE, GENDER_MALE};
pub use responses::HealthResponse;
