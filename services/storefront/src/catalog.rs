//! Box catalog view controller
//!
//! Holds the list the catalog page renders, the currently opened detail,
//! and the purchase flow. Refreshes are guarded by a generation counter:
//! a response that arrives after a newer refresh began is discarded, so
//! the rendered list can never go backwards in time.

use tracing::{error, info};

use common::error::ClientResult;
use common::models::BlindBox;
use gateway::StorefrontBackend;

use crate::purchase::{PurchaseFlow, PurchaseOutcome};

pub struct CatalogView<B: StorefrontBackend> {
    backend: B,
    boxes: Vec<BlindBox>,
    detail: Option<BlindBox>,
    generation: u64,
    flow: PurchaseFlow,
}

impl<B: StorefrontBackend> CatalogView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            boxes: Vec::new(),
            detail: None,
            generation: 0,
            flow: PurchaseFlow::new(),
        }
    }

    /// The boxes currently rendered
    pub fn boxes(&self) -> &[BlindBox] {
        &self.boxes
    }

    /// The opened detail, if any
    pub fn detail(&self) -> Option<&BlindBox> {
        self.detail.as_ref()
    }

    /// Refresh the list from the backend. On failure the previous list
    /// stays rendered.
    pub async fn load(&mut self) {
        let generation = self.begin_load();
        match self.backend.list_boxes().await {
            Ok(boxes) => self.apply(generation, boxes),
            Err(err) => error!("catalog refresh failed: {err}"),
        }
    }

    fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn apply(&mut self, generation: u64, boxes: Vec<BlindBox>) {
        if generation != self.generation {
            info!("discarding a stale catalog response");
            return;
        }
        self.boxes = boxes;
    }

    /// Filter the already-loaded list by case-insensitive substring match
    /// on the name. No network call.
    pub fn search(&self, term: &str) -> Vec<&BlindBox> {
        let needle = term.to_lowercase();
        self.boxes
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Open the detail for one box, fetching its item variants
    pub async fn open_detail(&mut self, box_id: i64) {
        match self.backend.box_detail(box_id).await {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => error!("loading detail for box {box_id} failed: {err}"),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Buy one box and, on success, refresh the list so the rendered stock
    /// reflects the purchase
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
