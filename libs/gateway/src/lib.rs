//! Typed HTTP gateway to the blind-box backend
//!
//! Every backend operation the applications consume is expressed here as an
//! intent-named method: what the call does, never which verb or path the
//! wire happens to use (several backend deletes are GETs with side effects;
//! that mapping lives only in [`client`]). Privileged operations require an
//! [`AdminCredential`][common::session::AdminCredential], which only an
//! admin session can mint; the backend still re-validates every privileged
//! request.
//!
//! The whole surface is a trait so the view controllers can be driven by a
//! mock backend in tests.

pub mod envelope;

mod client;

pub use client::ApiGateway;
pub use envelope::Reveal;

use common::error::ClientResult;
use common::models::{BestSeller, BlindBox, BoxDraft, NewPost, Order, OrderStatus, Post, User};
use common::session::AdminCredential;

/// The backend surface consumed by the storefront and admin applications
#[allow(async_fn_in_trait)]
pub trait StorefrontBackend {
    /// List all purchasable boxes
    async fn list_boxes(&self) -> ClientResult<Vec<BlindBox>>;

    /// Fetch one box with its item variants
    async fn box_detail(&self, box_id: i64) -> ClientResult<BlindBox>;

    /// Step A of the purchase workflow: reserve one unit of stock and
    /// create an unrevealed order, returning its id
    async fn purchase(&self, user_id: i64, box_id: i64) -> ClientResult<i64>;

    /// Step B of the purchase workflow: permanently bind an item to the
    /// order created by [`purchase`](Self::purchase)
    async fn reveal(&self, order_id: i64) -> ClientResult<Reveal>;

    /// Fetch the sales ranking
    async fn best_sellers(&self) -> ClientResult<Vec<BestSeller>>;

    /// List one user's orders
    async fn orders_for_user(&self, user_id: i64) -> ClientResult<Vec<Order>>;

    /// List every order, optionally filtered by status (admin)
    async fn all_orders(
        &self,
        credential: &AdminCredential,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<Order>>;

    /// Change an order's status
    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()>;

    /// Delete an order
    async fn delete_order(&self, order_id: i64) -> ClientResult<()>;

    /// Register a new account
    async fn register(&self, username: &str, password: &str, avatar: &str) -> ClientResult<()>;

    /// Log in, returning the user snapshot
    async fn login(&self, username: &str, password: &str) -> ClientResult<User>;

    /// Look up account details; the backend keys this on the username
    async fn user_info(&self, uid: &str) -> ClientResult<User>;

    /// List every registered user (admin)
    async fn all_users(&self, credential: &AdminCredential) -> ClientResult<Vec<User>>;

    /// Delete a user by username (admin)
    async fn delete_user(&self, credential: &AdminCredential, username: &str) -> ClientResult<()>;

    /// Create a box (admin)
    async fn create_box(&self, credential: &AdminCredential, draft: &BoxDraft) -> ClientResult<()>;

    /// Replace a box's fields (admin)
    async fn update_box(
        &self,
        credential: &AdminCredential,
        box_id: i64,
        draft: &BoxDraft,
    ) -> ClientResult<()>;

    /// Delete a box (admin)
    async fn delete_box(&self, credential: &AdminCredential, box_id: i64) -> ClientResult<()>;

    /// Fetch the community feed
    async fn list_posts(&self) -> ClientResult<Vec<Post>>;

    /// Publish a post, multipart when an image is attached
    async fn create_post(&self, new_post: &NewPost) -> ClientResult<()>;

    /// Like a post
    async fn like_post(&self, post_id: i64, user_id: i64) -> ClientResult<()>;

    /// List one user's own posts
    async fn posts_for_user(&self, user_id: i64) -> ClientResult<Vec<Post>>;

    /// Delete a post
    async fn delete_post(&self, post_id: i64) -> ClientResult<()>;
}
