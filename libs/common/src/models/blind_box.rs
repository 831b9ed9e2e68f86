//! Blind box and item models

use serde::{Deserialize, Serialize};

/// A purchasable blind-box SKU
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlindBox {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    /// Decremented by purchases server-side; never negative
    pub stock: i64,
    #[serde(default)]
    pub description: String,
    /// Possible contents; only populated by the detail endpoint
    #[serde(default)]
    pub items: Vec<BoxItem>,
}

/// A specific collectible variant belonging to one box
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoxItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub quantity: i64,
}

/// One entry of the best-sellers ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub id: i64,
    pub rank: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    pub sales_count: i64,
}

/// Payload for creating or editing a box (admin inventory view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoxDraft {
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub stock: i64,
    pub description: String,
    pub items: Vec<ItemDraft>,
}

/// One item variant of a box draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub quantity: i64,
}
