//! The two-step purchase-and-reveal workflow
//!
//! Step A (`purchase`) reserves stock and creates an unrevealed order;
//! step B (`reveal`) binds an item to exactly that order. Step B is never
//! attempted unless step A succeeded, and a busy flag rejects overlapping
//! runs so a double-click cannot buy two boxes.

use tracing::{error, info};

use common::error::ClientResult;
use gateway::{Reveal, StorefrontBackend};

/// Outcome of one purchase attempt
#[derive(Debug)]
pub enum PurchaseOutcome {
    /// Both steps succeeded; the reveal carries the awarded item
    Revealed(Reveal),
    /// No user in the session; nothing was sent to the backend
    LoginRequired,
    /// Another purchase is still in flight; this one was not started
    Busy,
}

/// Serializes purchase attempts and runs the two backend steps in order
#[derive(Debug, Default)]
pub struct PurchaseFlow {
    busy: bool,
}

impl PurchaseFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a purchase is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Run one purchase of `box_id` for the session's user.
    ///
    /// Fails with the underlying error when either step fails; the busy
    /// flag is released on every exit path. A failed step A leaves no
    /// revealed order, and a failed step B leaves the order unrevealed on
    /// the backend, never a partial result here.
    pub async fn run<B: StorefrontBackend>(
        &mut self,
        backend: &B,
        user_id: Option<i64>,
        box_id: i64,
    ) -> ClientResult<PurchaseOutcome> {
        if self.busy {
            info!("purchase of box {box_id} rejected: another purchase is in flight");
            return Ok(PurchaseOutcome::Busy);
        }
        let Some(user_id) = user_id else {
            info!("purchase of box {box_id} rejected: not logged in");
            return Ok(PurchaseOutcome::LoginRequired);
        };

        self.busy = true;
        let outcome = Self::run_steps(backend, user_id, box_id).await;
        self.busy = false;

        match outcome {
            Ok(reveal) => Ok(PurchaseOutcome::Revealed(reveal)),
            Err(err) => {
                error!("purchase of box {box_id} failed: {err}");
                Err(err)
            }
        }
    }

    async fn run_steps<B: StorefrontBackend>(
        backend: &B,
        user_id: i64,
        box_id: i64,
    ) -> ClientResult<Reveal> {
        let order_id = backend.purchase(user_id, box_id).await?;
        info!("purchase of box {box_id} created order {order_id}");
        backend.reveal(order_id).await
    }
}
