//! Domain models for the user service.

pub mod user;

pub use user::User;
