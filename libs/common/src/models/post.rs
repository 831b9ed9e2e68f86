//! Community post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-side cap on attached images
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Post author snapshot embedded in feed payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub avatar: String,
}

/// A community feed post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    /// Image reference relative to the backend origin, if any
    #[serde(default)]
    pub image: Option<String>,
    /// The "my posts" endpoint omits the author snapshot
    #[serde(default)]
    pub author: Option<PostAuthor>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: i64,
}

/// An image selected for a new post
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Payload for creating a post; at least one of content or image must be
/// present (validated before any network call)
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub user_id: i64,
    pub content: String,
    pub image: Option<ImageAttachment>,
}
