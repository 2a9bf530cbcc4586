//! In-memory user store.
//!
//! The backing map and the id counter live together behind a single
//! `parking_lot::RwLock`: lookups share the read guard, inserts and deletes
//! take the write guard for exactly one step. No guard is ever held across
//! an await point or handed to a caller.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;

use crate::domain::{User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// How the store picks the id for a new entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAllocation {
    /// Strictly increasing counter, advanced once per insert, never reused.
    #[default]
    Monotonic,
    /// `entry count + 1` at insert time. Collides with a live key after a
    /// delete and silently replaces it; kept for compatibility only.
    EntryCount,
}

impl IdAllocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdAllocation::Monotonic => "monotonic",
            IdAllocation::EntryCount => "entry-count",
        }
    }
}

impl fmt::Display for IdAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdAllocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(IdAllocation::Monotonic),
            "entry-count" | "entry_count" => Ok(IdAllocation::EntryCount),
            other => Err(format!(
                "unknown id allocation '{}', expected 'monotonic' or 'entry-count'",
                other
            )),
        }
    }
}

/// Concurrency-safe keyed collection of users.
///
/// Absence is reported through `Option`/`bool`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserStore: Send + Sync {
    /// Store a user under a freshly assigned id and return that id
    fn insert(&self, user: User) -> UserId;

    /// Look up a user by id
    fn get(&self, id: UserId) -> Option<User>;

    /// Remove the entry if present, returning whether it existed
    fn delete(&self, id: UserId) -> bool;

    /// Number of entries at the moment of the call
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
struct Entries {
    users: HashMap<UserId, User>,
    /// Last id handed out by the monotonic policy
    last_id: UserId,
}

/// `UserStore` backed by a `HashMap` under a readers-writer lock.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    entries: RwLock<Entries>,
    allocation: IdAllocation,
}

impl MemoryUserStore {
    /// Create an empty store using the given id allocation policy
    pub fn new(allocation: IdAllocation) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            allocation,
        }
    }
}

impl UserStore for MemoryUserStore {
    fn insert(&self, user: User) -> UserId {
        let mut entries = self.entries.write();

        let id = match self.allocation {
            IdAllocation::Monotonic => {
                entries.last_id += 1;
                entries.last_id
            }
            IdAllocation::EntryCount => entries.users.len() as UserId + 1,
        };

        if entries.users.insert(id, user).is_some() {
            tracing::warn!(id, "Insert replaced an existing user");
        }

        id
    }

    fn get(&self, id: UserId) -> Option<User> {
        self.entries.read().users.get(&id).cloned()
    }

    fn delete(&self, id: UserId) -> bool {
        self.entries.write().users.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.entries.read().users.len()
    }
}
