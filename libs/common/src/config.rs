//! Client configuration
//!
//! Configuration is read from environment variables with defaults: the
//! fixed local backend origin and a 5 second timeout on the shared HTTP
//! client.

use std::env;
use std::path::PathBuf;

/// Configuration for the storefront client applications
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g. "http://localhost:7001")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Path of the file backing the persisted session
    pub session_path: PathBuf,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `STOREFRONT_BASE_URL`: backend origin (default: "http://localhost:7001")
    /// - `STOREFRONT_TIMEOUT_SECS`: request timeout in seconds (default: 5)
    /// - `STOREFRONT_SESSION_PATH`: session file path (default: "storefront-session.json")
    pub fn from_env() -> Self {
        let base_url = env::var("STOREFRONT_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:7001".to_string());

        let timeout_secs = env::var("STOREFRONT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let session_path = env::var("STOREFRONT_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("storefront-session.json"));

        Self {
            base_url,
            timeout_secs,
            session_path,
        }
    }
}
