//! Domain entities for the accounts domain

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Role assigned at signup. Persisted but read by nothing; enforcement is
/// out of scope for this service.
const DEFAULT_ROLE: &str = "user";

/// Stored shape of a registered account (collection `useraccount`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Assigned by the store at insert; absent until then and skipped during
    /// serialization so the store gets to pick it.
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// Lowercase hex SHA-256 of the plaintext password.
    pub password_hash: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_is_active() -> bool {
    true
}

impl UserAccount {
    /// New account with the signup defaults applied.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            role: default_role(),
            is_active: default_is_active(),
        }
    }
}
