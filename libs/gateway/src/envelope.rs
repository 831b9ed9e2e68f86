//! Response envelopes used by the backend
//!
//! The backend wraps payloads in two shapes: a bare `{data}` object and a
//! `{success, message?, data?}` object. A 200 response with `success:false`
//! is an application-level failure and maps to [`ClientError::Backend`]
//! carrying the message field, or a generic fallback when it is absent.

use serde::Deserialize;

use common::error::{ClientError, ClientResult};
use common::models::{BlindBox, BoxItem, OrderStatus, Post};

/// The common `{success?, message?, data?}` wrapper. Endpoints that answer
/// with a bare `{data}` decode through this as well, with `success` absent.
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> StatusEnvelope<T> {
    /// Unwrap the payload, turning `success:false` into a backend error
    pub fn into_data(self) -> ClientResult<T> {
        if self.success == Some(false) {
            return Err(ClientError::backend(self.message));
        }
        self.data
            .ok_or_else(|| ClientError::Decode("response is missing its data field".to_string()))
    }
}

/// Acknowledgement-only response: `{success, message?}`
#[derive(Debug, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// Turn the acknowledgement into a result
    pub fn into_result(self) -> ClientResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ClientError::backend(self.message))
        }
    }
}

/// Login response: `{success, message?, user?}`
#[derive(Debug, Deserialize)]
pub struct LoginEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<common::models::User>,
}

impl LoginEnvelope {
    /// Unwrap the logged-in user
    pub fn into_user(self) -> ClientResult<common::models::User> {
        if !self.success {
            return Err(ClientError::backend(self.message));
        }
        self.user
            .ok_or_else(|| ClientError::Decode("login response is missing the user".to_string()))
    }
}

/// Payload of a successful purchase: the freshly created order's id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub order_id: i64,
}

/// Payload of `GET /posts`: the feed nested one level down
#[derive(Debug, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Result of revealing an order: the awarded item plus order metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reveal {
    pub item: BoxItem,
    #[serde(rename = "box", default)]
    pub blind_box: Option<BlindBox>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}
