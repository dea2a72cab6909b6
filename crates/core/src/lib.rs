//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `user-service` - User directory and validation endpoint
//! - `order-service` - Order management with remote user validation
//! - `gateway` - Single-port composition of both services
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no stores.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, usernames, and
//!   statuses, plus the validation wire types exchanged between services

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
