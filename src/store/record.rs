//! User Record Module
//!
//! The confirmed, stored shape of a user.

use serde::{Deserialize, Serialize};

use crate::models::CreationRequest;

// == User Record ==
/// A stored user, keyed in the store by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i32,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub age: i32,
    pub gender: char,
    pub phone: Option<String>,
    pub zip: Option<String>,
}

// == Conversion ==
/// Copies every field of the payload verbatim.
impl From<CreationRequest> for UserRecord {
    fn from(req: CreationRequest) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            middle_name: req.middle_name,
            last_name: req.last_name,
            age: req.age,
            gender: req.gender,
            phone: req.phone,
            zip: req.zip,
        }
    }
}
