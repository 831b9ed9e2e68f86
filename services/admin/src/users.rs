//! User management
//!
//! Listing, local search, and deletion of accounts. Deleting the
//! administrator account is refused locally, before any network call.

use tracing::error;

use common::error::{ClientError, ClientResult};
use common::models::{ADMIN_USER_ID, User};
use common::session::AdminCredential;
use gateway::StorefrontBackend;

pub struct UsersView<B: StorefrontBackend> {
    backend: B,
    credential: AdminCredential,
    users: Vec<User>,
}

impl<B: StorefrontBackend> UsersView<B> {
    pub fn new(backend: B, credential: AdminCredential) -> Self {
        Self {
            backend,
            credential,
            users: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Refresh the user list; failures keep the previous list
    pub async fn load(&mut self) {
        match self.backend.all_users(&self.credential).await {
            Ok(users) => self.users = users,
            Err(err) => error!("user list refresh failed: {err}"),
        }
    }

    /// Filter the loaded list by case-insensitive substring match on the
    /// username. No network call.
    pub fn search(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.username.to_lowercase().contains(&needle))
            .collect()
    }

    /// Delete an account behind a confirmation gate. The administrator
    /// account is refused locally.
    pub async fn delete(&mut self, username: &str, confirmed: bool) -> ClientResult<bool> {
        if self
            .users
            .iter()
            .any(|user| user.username == username && user.id == ADMIN_USER_ID)
        {
            return Err(ClientError::Validation(
                "The administrator account cannot be deleted".to_string(),
            ));
        }
        if !confirmed {
            return Ok(false);
        }
        self.backend.delete_user(&self.credential, username).await?;
        self.users.retain(|user| user.username != username);
        Ok(true)
    }
}
