pub mod value_objects;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use value_objects::Email;

/// Postal address attached to a user
///
/// Coordinates are optional; addresses are appended to a user's list and
/// never edited or removed individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// User account record
///
/// # Invariants
/// - `email` is unique across all users and immutable after creation
/// - "deletion" is a soft deactivation; the record stays in storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub addresses: Vec<Address>,
    pub is_active: bool,
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
}

/// Partial update payload for a user
///
/// Email is deliberately absent: it cannot change after creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub addresses: Option<Vec<Address>>,
}

impl User {
    /// Creates a new user with a fresh identifier
    ///
    /// New users start active with an empty address list.
    pub fn create(new: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            addresses: Vec::new(),
            is_active: true,
        }
    }

    /// Returns a copy with the patch's present fields applied
    pub fn merged(&self, patch: &UserPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: self.email.clone(),
            addresses: patch
                .addresses
                .clone()
                .unwrap_or_else(|| self.addresses.clone()),
            is_active: self.is_active,
        }
    }

    /// Returns a copy with one address appended
    pub fn with_address(&self, address: Address) -> Self {
        let mut updated = self.clone();
        updated.addresses.push(address);
        updated
    }
}
