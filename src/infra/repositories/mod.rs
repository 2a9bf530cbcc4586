//! Repository layer - Data access abstraction
//!
//! Repositories hide how records are held behind a trait, so services
//! never touch the backing collection or its lock directly.

mod user_store;

pub use user_store::{IdAllocation, MemoryUserStore, UserStore};

// Export mock for tests
#[cfg(any(test, feature = "test-utils"))]
pub use user_store::MockUserStore;
