//! Infrastructure layer - Storage backends
//!
//! The only backend is the process-local in-memory user store. State is
//! created empty at startup and lives until the process exits.

pub mod repositories;

pub use repositories::{IdAllocation, MemoryUserStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserStore;
