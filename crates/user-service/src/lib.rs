//! Clementine User Service library.
//!
//! This crate provides the user service functionality as a library,
//! allowing it to be mounted by the gateway and exercised in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;

use state::AppState;

/// Build the complete user service router with its state applied.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes().with_state(state)
}
