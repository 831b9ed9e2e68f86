//! Administrator console for the blind-box storefront
//!
//! View controllers for the privileged surfaces: order management across
//! all users, inventory CRUD and user management. Every controller holds
//! the [`AdminCredential`][common::session::AdminCredential] it was
//! constructed with, so a non-admin session cannot reach these code paths
//! at all; the backend still re-validates every request.

pub mod inventory;
pub mod orders;
pub mod repl;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;
