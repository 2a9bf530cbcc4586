//! Application services layer - Use cases and business logic.
//!
//! Services depend on the `UserStore` abstraction rather than a concrete
//! backend, so handlers and tests can swap implementations.

mod user_service;

pub use user_service::{UserManager, UserService};
