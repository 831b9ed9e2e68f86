//! Sales-ranking view controller
//!
//! A read-only ranking with the same buy affordance as the catalog: a
//! successful purchase refreshes the ranking so sales counts stay current.

use tracing::error;

use common::error::ClientResult;
use common::models::BestSeller;
use gateway::StorefrontBackend;

use crate::purchase::{PurchaseFlow, PurchaseOutcome};

pub struct BestSellersView<B: StorefrontBackend> {
    backend: B,
    entries: Vec<BestSeller>,
    flow: PurchaseFlow,
}

impl<B: StorefrontBackend> BestSellersView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::new(),
            flow: PurchaseFlow::new(),
        }
    }

    /// The ranking currently rendered, best first
    pub fn entries(&self) -> &[BestSeller] {
        &self.entries
    }

    /// Refresh the ranking; on failure the previous one stays rendered
    pub async fn load(&mut self) {
        match self.backend.best_sellers().await {
            Ok(entries) => self.entries = entries,
            Err(err) => error!("best-sellers refresh failed: {err}"),
        }
    }

    /// Buy one ranked box and refresh the ranking on success
    pub async fn purchase(
        &mut self,
        user_id: Option<i64>,
        box_id: i64,
    ) -> ClientResult<PurchaseOutcome> {
        let outcome = self.flow.run(&self.backend, user_id, box_id).await?;
        if matches!(outcome, PurchaseOutcome::Revealed(_)) {
            self.load().await;
        }
        Ok(outcome)
    }
}
