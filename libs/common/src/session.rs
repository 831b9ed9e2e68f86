//! Session state holder
//!
//! Per-process session state: login flag, current user snapshot, current
//! avatar, derived admin flag. Every mutation is written through to the
//! backing [`KeyValueStore`] immediately under fixed keys, and construction
//! rehydrates from the same keys. There is no expiry, no token refresh and
//! no server-side validation here: the admin flag only decides which UI is
//! shown, and the backend re-checks authorization on every privileged
//! operation.

use tracing::info;

use crate::error::ClientResult;
use crate::models::{User, ADMIN_USER_ID};
use crate::storage::KeyValueStore;

const KEY_IS_LOGIN: &str = "isLogin";
const KEY_CURRENT_USER: &str = "currentUser";
const KEY_CURRENT_AVATAR: &str = "currentAvatar";
const KEY_IS_ADMIN: &str = "isAdmin";
const KEY_USER_ID: &str = "userId";

/// Avatars offered at registration; the first entry is the default
pub const DEFAULT_AVATARS: [&str; 4] = [
    "/avatars/sea.jpg",
    "/avatars/flower.jpg",
    "/avatars/snow.jpg",
    "/avatars/moon.jpg",
];

/// Proof that the session belongs to the administrator account.
///
/// Only [`SessionContext::admin_credential`] mints one, so privileged
/// gateway methods cannot be reached from a non-admin session by
/// construction. This is advisory: the backend still re-validates every
/// privileged request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminCredential {
    user_id: i64,
}

impl AdminCredential {
    fn for_user(user_id: i64) -> Option<Self> {
        (user_id == ADMIN_USER_ID).then_some(Self { user_id })
    }

    /// The administrator's user id
    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

/// Session state with a single read/write boundary to persistent storage
pub struct SessionContext<S: KeyValueStore> {
    store: S,
    is_login: bool,
    current_user: Option<User>,
    current_avatar: String,
    is_admin: bool,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// Open a session, rehydrating state from the store. A corrupt or
    /// missing user snapshot falls back to logged-out defaults; a missing
    /// avatar falls back to the default avatar.
    pub fn open(store: S) -> ClientResult<Self> {
        let is_login = matches!(store.get(KEY_IS_LOGIN)?.as_deref(), Some("true"));
        let current_user = store
            .get(KEY_CURRENT_USER)?
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| serde_json::from_str(&raw).ok());
        let current_avatar = store
            .get(KEY_CURRENT_AVATAR)?
            .filter(|avatar| !avatar.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATARS[0].to_string());

        // The admin flag is derived, never trusted from storage: recompute
        // it from the stored user id on every load.
        let is_admin = store
            .get(KEY_USER_ID)?
            .and_then(|raw| raw.parse::<i64>().ok())
            .is_some_and(|id| id == ADMIN_USER_ID);

        Ok(Self {
            store,
            is_login,
            current_user,
            current_avatar,
            is_admin,
        })
    }

    /// Whether a user is logged in
    pub fn is_login(&self) -> bool {
        self.is_login
    }

    /// The current user snapshot, if logged in
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// The current avatar reference
    pub fn current_avatar(&self) -> &str {
        &self.current_avatar
    }

    /// Whether the session belongs to the administrator (advisory)
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// The current user id, if logged in
    pub fn user_id(&self) -> Option<i64> {
        self.current_user.as_ref().map(|user| user.id)
    }

    /// Mint the capability required by privileged gateway calls
    pub fn admin_credential(&self) -> Option<AdminCredential> {
        self.user_id().and_then(AdminCredential::for_user)
    }

    /// Establish a logged-in session from a login response
    pub fn establish(&mut self, user: User) -> ClientResult<()> {
        info!("session established for user {}", user.username);

        self.is_login = true;
        self.current_avatar = if user.avatar.is_empty() {
            DEFAULT_AVATARS[0].to_string()
        } else {
            user.avatar.clone()
        };
        self.is_admin = user.id == ADMIN_USER_ID;
        self.current_user = Some(user);
        self.persist()
    }

    /// Clear all session fields, both in memory and in storage
    pub fn logout(&mut self) -> ClientResult<()> {
        info!("session cleared");

        self.is_login = false;
        self.current_user = None;
        self.current_avatar = DEFAULT_AVATARS[0].to_string();
        self.is_admin = false;

        self.store.remove(KEY_IS_LOGIN)?;
        self.store.remove(KEY_CURRENT_USER)?;
        self.store.remove(KEY_CURRENT_AVATAR)?;
        self.store.remove(KEY_IS_ADMIN)?;
        self.store.remove(KEY_USER_ID)?;
        Ok(())
    }

    fn persist(&mut self) -> ClientResult<()> {
        let user_json = match &self.current_user {
            Some(user) => serde_json::to_string(user)?,
            None => String::new(),
        };

        self.store
            .set(KEY_IS_LOGIN, if self.is_login { "true" } else { "false" })?;
        self.store.set(KEY_CURRENT_USER, &user_json)?;
        self.store.set(KEY_CURRENT_AVATAR, &self.current_avatar)?;
        self.store
            .set(KEY_IS_ADMIN, if self.is_admin { "true" } else { "false" })?;
        if let Some(id) = self.user_id() {
            self.store.set(KEY_USER_ID, &id.to_string())?;
        } else {
            self.store.remove(KEY_USER_ID)?;
        }
        Ok(())
    }

    /// Read access to the backing store, for diagnostics and tests
    pub fn store(&self) -> &S {
        &self.store
    }
}
