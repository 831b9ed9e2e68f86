//! Inventory management: box and item-variant CRUD
//!
//! Drafts are validated locally before any network call, and every
//! successful mutation is followed by a full reload so the rendered list
//! always reflects the backend's view.

use tracing::error;

use common::error::{ClientError, ClientResult};
use common::models::{BlindBox, BoxDraft};
use common::session::AdminCredential;
use common::validation::validate_box_draft;
use gateway::StorefrontBackend;

pub struct InventoryView<B: StorefrontBackend> {
    backend: B,
    credential: AdminCredential,
    boxes: Vec<BlindBox>,
}

impl<B: StorefrontBackend> InventoryView<B> {
    pub fn new(backend: B, credential: AdminCredential) -> Self {
        Self {
            backend,
            credential,
            boxes: Vec::new(),
        }
    }

    pub fn boxes(&self) -> &[BlindBox] {
        &self.boxes
    }

    /// Refresh the inventory list; failures keep the previous list
    pub async fn load(&mut self) {
        match self.backend.list_boxes().await {
            Ok(boxes) => self.boxes = boxes,
            Err(err) => error!("inventory refresh failed: {err}"),
        }
    }

    /// Create a box from a validated draft, then reload
    pub async fn create(&mut self, draft: &BoxDraft) -> ClientResult<()> {
        validate_box_draft(draft).map_err(ClientError::Validation)?;
        self.backend.create_box(&self.credential, draft).await?;
        self.load().await;
        Ok(())
    }

    /// Replace a box's fields from a validated draft, then reload
    pub async fn update(&mut self, box_id: i64, draft: &BoxDraft) -> ClientResult<()> {
        validate_box_draft(draft).map_err(ClientError::Validation)?;
        self.backend.update_box(&self.credential, box_id, draft).await?;
        self.load().await;
        Ok(())
    }

    /// Delete a box behind a confirmation gate, then reload
    pub async fn delete(&mut self, box_id: i64, confirmed: bool) -> ClientResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.backend.delete_box(&self.credential, box_id).await?;
        self.load().await;
        Ok(true)
    }
}
