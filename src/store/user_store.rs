//! User Store Module
//!
//! In-memory user storage keyed by id. Existence rules belong to the
//! handlers; the store only writes and reads.

use std::collections::BTreeMap;

use crate::error::{Result, UserError};
use crate::store::UserRecord;

// == User Store ==
/// In-memory user records ordered by id.
#[derive(Debug, Default)]
pub struct UserStore {
    /// Records keyed by their own id
    users: BTreeMap<i32, UserRecord>,
}

impl UserStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    /// Writes a record at its id, replacing anything already there.
    ///
    /// Callers check for an existing record first; no uniqueness is enforced here.
    pub fn create_user(&mut self, record: UserRecord) -> i32 {
        let id = record.id;
        self.users.insert(id, record);
        id
    }

    // == Update ==
    /// Overwrites every field of an existing record.
    ///
    /// Returns [`UserError::NotFound`] if nothing is stored at the record's id.
    pub fn update_user(&mut self, record: UserRecord) -> Result<i32> {
        let id = record.id;
        match self.users.get_mut(&id) {
            Some(existing) => {
                *existing = record;
                Ok(id)
            }
            None => Err(UserError::NotFound(id)),
        }
    }

    // == List ==
    /// Returns every record ordered by ascending id.
    pub fn list_all_users(&self) -> Vec<UserRecord> {
        self.users.values().cloned().collect()
    }

    // == Contains ==
    /// Returns true if a record is stored at `id`.
    pub fn contains(&self, id: i32) -> bool {
        self.users.contains_key(&id)
    }

    // == Length ==
    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
