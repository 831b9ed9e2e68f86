//! Domain models mirroring the backend's JSON contract
//!
//! The authoritative shapes live server-side; these structs are the
//! client-side contract, with camelCase wire names preserved.

pub mod blind_box;
pub mod order;
pub mod post;
pub mod user;

pub use blind_box::{BestSeller, BlindBox, BoxDraft, BoxItem, ItemDraft};
pub use order::{Order, OrderCounts, OrderStatus};
pub use post::{ImageAttachment, NewPost, Post, PostAuthor, MAX_IMAGE_BYTES};
pub use user::{User, ADMIN_USER_ID};
