//! Common library for the blind-box storefront client
//!
//! This crate provides the functionality shared by the storefront and admin
//! applications: the domain models mirroring the backend's JSON contract,
//! the client error taxonomy, configuration, the key-value persistence
//! layer backing the session, session state itself, and input validation.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod validation;
