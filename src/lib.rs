//! User Store API - In-memory user records over HTTP
//!
//! Clients create, fetch and delete `User` records keyed by a store-assigned
//! integer id. All shared state lives in a single concurrency-safe store;
//! the HTTP layer only parses input, calls one store operation and
//! serializes the outcome.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `User` record
//! - **infra**: The in-memory user store
//! - **services**: Validation and not-found mapping on top of the store
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 9090
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserId};
pub use errors::{AppError, AppResult};
pub use infra::{IdAllocation, MemoryUserStore, UserStore};
