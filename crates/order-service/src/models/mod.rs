//! Domain models for the order service.

pub mod order;

pub use order::{LineItem, Order};
