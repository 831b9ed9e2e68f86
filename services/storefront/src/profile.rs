//! Profile view controller: the shopper's own orders and posts
//!
//! Mutations follow a patch-on-success policy: the local list only
//! changes after the backend acknowledged the mutation, and deletes go
//! through an explicit confirmation gate.

use tracing::error;

use common::error::{ClientError, ClientResult};
use common::models::{Order, OrderStatus, Post};
use common::session::SessionContext;
use common::storage::KeyValueStore;
use gateway::StorefrontBackend;

pub struct ProfileView<B: StorefrontBackend> {
    backend: B,
    orders: Vec<Order>,
    posts: Vec<Post>,
}

impl<B: StorefrontBackend> ProfileView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            orders: Vec::new(),
            posts: Vec::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Re-fetch the logged-in user's account details and replace the
    /// session snapshot with the backend's current view
    pub async fn refresh_user<S: KeyValueStore>(
        &self,
        session: &mut SessionContext<S>,
    ) -> ClientResult<()> {
        let Some(username) = session.current_user().map(|user| user.username.clone()) else {
            return Err(ClientError::LoginRequired);
        };
        let user = self.backend.user_info(&username).await?;
        session.establish(user)
    }

    /// Refresh the shopper's order history; failures keep the previous
    /// list rendered
    pub async fn load_orders(&mut self, user_id: i64) {
        match self.backend.orders_for_user(user_id).await {
            Ok(orders) => self.orders = orders,
            Err(err) => error!("order history refresh failed: {err}"),
        }
    }

    /// Change one order's status, patching the rendered row on success.
    /// Setting the status an order already has is a no-op success.
    pub async fn update_order_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
    ) -> ClientResult<()> {
        self.backend.update_order_status(order_id, status).await?;
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
        Ok(())
    }

    /// Delete one order. `confirmed` is the caller's confirmation gate:
    /// without it nothing is sent and `false` is returned.
    pub async fn delete_order(&mut self, order_id: i64, confirmed: bool) -> ClientResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.backend.delete_order(order_id).await?;
        self.orders.retain(|o| o.id != order_id);
        Ok(true)
    }

    /// Refresh the shopper's own posts
    pub async fn load_posts(&mut self, user_id: i64) {
        match self.backend.posts_for_user(user_id).await {
            Ok(posts) => self.posts = posts,
            Err(err) => error!("own-posts refresh failed: {err}"),
        }
    }

    /// Delete one of the shopper's posts, behind the same confirmation
    /// gate as order deletion
    pub async fn delete_post(&mut self, post_id: i64, confirmed: bool) -> ClientResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.backend.delete_post(post_id).await?;
        self.posts.retain(|p| p.id != post_id);
        Ok(true)
    }
}
