//! Order management across all users
//!
//! The view keeps two order sets: the full set, from which the per-status
//! counts are tallied, and the displayed set, which honors the current
//! status filter. Filtering changes what is displayed but never the
//! counts. Mutations follow the same patch-on-success policy as the
//! storefront profile, applied to both sets.

use tracing::error;

use common::error::ClientResult;
use common::models::{Order, OrderCounts, OrderStatus};
use common::session::AdminCredential;
use gateway::StorefrontBackend;

pub struct AdminOrdersView<B: StorefrontBackend> {
    backend: B,
    credential: AdminCredential,
    all: Vec<Order>,
    displayed: Vec<Order>,
    filter: Option<OrderStatus>,
}

impl<B: StorefrontBackend> AdminOrdersView<B> {
    pub fn new(backend: B, credential: AdminCredential) -> Self {
        Self {
            backend,
            credential,
            all: Vec::new(),
            displayed: Vec::new(),
            filter: None,
        }
    }

    /// The rows the view renders under the current filter
    pub fn displayed(&self) -> &[Order] {
        &self.displayed
    }

    /// The active status filter
    pub fn filter(&self) -> Option<OrderStatus> {
        self.filter
    }

    /// Per-status counts, always tallied over the full set
    pub fn counts(&self) -> OrderCounts {
        OrderCounts::tally(&self.all)
    }

    /// Refresh the full order set and re-apply the current filter.
    /// Failures keep the previous sets rendered.
    pub async fn load(&mut self) {
        match self.backend.all_orders(&self.credential, None).await {
            Ok(orders) => {
                self.all = orders;
                self.refresh_displayed();
            }
            Err(err) => error!("order overview refresh failed: {err}"),
        }
    }

    /// Change the status filter and fetch the matching rows
    pub async fn set_filter(&mut self, filter: Option<OrderStatus>) {
        self.filter = filter;
        match self.backend.all_orders(&self.credential, filter).await {
            Ok(orders) => self.displayed = orders,
            Err(err) => error!("filtered order fetch failed: {err}"),
        }
    }

    fn refresh_displayed(&mut self) {
        self.displayed = match self.filter {
            Some(wanted) => self
                .all
                .iter()
                .filter(|o| o.status == wanted)
                .cloned()
                .collect(),
            None => self.all.clone(),
        };
    }

    /// Change one order's status, patching both sets on success
    pub async fn update_status(&mut self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        self.backend.update_order_status(order_id, status).await?;
        for order in self.all.iter_mut().filter(|o| o.id == order_id) {
            order.status = status;
        }
        self.refresh_displayed();
        Ok(())
    }

    /// Delete an order behind a confirmation gate. Both sets and the
    /// counts reflect the deletion on success.
    pub async fn delete(&mut self, order_id: i64, confirmed: bool) -> ClientResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.backend.delete_order(order_id).await?;
        self.all.retain(|o| o.id != order_id);
        self.refresh_displayed();
        Ok(true)
    }
}
