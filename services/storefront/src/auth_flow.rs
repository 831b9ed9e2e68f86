//! Registration and login flows
//!
//! Registration validates locally, creates the account, then logs in with
//! the same credentials to establish the session. When that auto-login
//! fails the account still exists, so the caller is routed to the login
//! view instead of receiving an error.

use tracing::{error, info};

use common::error::{ClientError, ClientResult};
use common::session::SessionContext;
use common::storage::KeyValueStore;
use common::validation::{validate_password, validate_username};
use gateway::StorefrontBackend;

/// Where the caller should land after an account flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Profile,
    Login,
}

/// Register a new account and establish a session for it
pub async fn register<B: StorefrontBackend, S: KeyValueStore>(
    backend: &B,
    session: &mut SessionContext<S>,
    username: &str,
    password: &str,
    avatar: &str,
) -> ClientResult<Navigation> {
    validate_username(username).map_err(ClientError::Validation)?;
    validate_password(password).map_err(ClientError::Validation)?;

    backend.register(username, password, avatar).await?;
    info!("registered account {username}");

    match backend.login(username, password).await {
        Ok(user) => {
            session.establish(user)?;
            Ok(Navigation::Profile)
        }
        Err(err) => {
            // The account exists; let the user log in by hand.
            error!("auto-login after registration failed: {err}");
            Ok(Navigation::Login)
        }
    }
}

/// Log in and establish the session
pub async fn login<B: StorefrontBackend, S: KeyValueStore>(
    backend: &B,
    session: &mut SessionContext<S>,
    username: &str,
    password: &str,
) -> ClientResult<Navigation> {
    let user = backend.login(username, password).await?;
    session.establish(user)?;
    Ok(Navigation::Profile)
}
