//! Application state shared by all handlers.

use std::sync::Arc;

use crate::infra::{IdAllocation, MemoryUserStore};
use crate::services::{UserManager, UserService};

/// Application state containing all services.
///
/// Cloning is cheap; every clone shares the same store.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state backed by a fresh, empty in-memory store.
    pub fn in_memory(allocation: IdAllocation) -> Self {
        let store = Arc::new(MemoryUserStore::new(allocation));
        Self::new(Arc::new(UserManager::new(store)))
    }
}
