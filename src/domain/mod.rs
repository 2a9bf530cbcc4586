//! Domain layer - Core business entities
//!
//! Contains the `User` record and its identifier type, independent of
//! storage and transport concerns.

pub mod user;

pub use user::{User, UserId};
