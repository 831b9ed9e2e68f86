//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The reserved identifier of the administrator account.
///
/// The backend enforces its privileges; the client only uses this value to
/// hide admin-only surfaces and to refuse obviously invalid actions (such
/// as deleting the administrator) before a call is made.
pub const ADMIN_USER_ID: i64 = 11;

/// User entity as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Avatar image reference (URL or bundled asset path)
    #[serde(default)]
    pub avatar: String,
    /// Not every endpoint includes the registration timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether this user is the reserved administrator account
    pub fn is_admin(&self) -> bool {
        self.id == ADMIN_USER_ID
    }
}
