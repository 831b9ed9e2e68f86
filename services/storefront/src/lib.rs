//! Shopper-facing blind-box storefront
//!
//! View controllers over the backend gateway: the box catalog, the sales
//! ranking, the community feed, the shopper's profile (orders and posts)
//! and the account flows. Each controller owns the state its view renders
//! and talks to the backend through the [`StorefrontBackend`] trait, so
//! tests drive them with an in-memory mock.
//!
//! [`StorefrontBackend`]: gateway::StorefrontBackend

pub mod auth_flow;
pub mod bestsellers;
pub mod catalog;
pub mod community;
pub mod profile;
pub mod purchase;
pub mod repl;

#[cfg(test)]
pub(crate) mod testing;
