//! Clementine Order Service library.
//!
//! This crate provides the order service functionality as a library,
//! allowing it to be mounted by the gateway and exercised in tests.
//!
//! Order creation validates the owning user against the remote user
//! service before anything is persisted; see [`validation`] for the
//! client and its failure classification.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

use axum::Router;

use state::AppState;

/// Build the complete order service router with its state applied.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes().with_state(state)
}
