//! Request DTOs for the user service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer};

use crate::error::{Result, UserError};
use crate::store::UserStore;

/// Gender code accepted for male users.
pub const GENDER_MALE: char = 'M';

/// Gender code accepted for female users.
pub const GENDER_FEMALE: char = 'F';

/// Request body for POST /users and PUT /users
///
/// Missing or null fields take their zero value (0, NUL, None), so an
/// empty object parses but never validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CreationRequest {
    /// Caller-assigned user id; 0 means unset
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i32,
    /// Single character code, `M` or `F` when valid
    #[serde(deserialize_with = "null_as_default")]
    pub gender: char,
    pub phone: Option<String>,
    pub zip: Option<String>,
}

/// Reads an explicit `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreationRequest {
    /// Parses a raw request body.
    ///
    /// Any syntax or shape problem becomes [`UserError::MalformedInput`].
    pub fn from_body(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| UserError::MalformedInput(e.to_string()))
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id == 0 {
            return Some("Id must be set and non-zero".to_string());
        }
        if self.age <= 0 {
            return Some(format!("Age must be positive, got {}", self.age));
        }
        if self.gender != GENDER_MALE && self.gender != GENDER_FEMALE {
            return Some(format!(
                "Gender must be '{}' or '{}', got {:?}",
                GENDER_MALE, GENDER_FEMALE, self.gender
            ));
        }
        None
    }

    /// Returns true if the payload passes every field rule.
    pub fn is_valid(&self) -> bool {
        self.validate().is_none()
    }

    /// Returns true if a record with this payload's id is already stored.
    pub fn user_exists(&self, store: &UserStore) -> bool {
        store.contains(self.id)
    }
}
