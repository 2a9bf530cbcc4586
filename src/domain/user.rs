//! User domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Store-assigned user identifier
pub type UserId = u64;

/// User record.
///
/// Carries no identity of its own; the store assigns one on insert.
/// A body without `name` decodes to an empty name and fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// User display name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ada")]
    pub name: String,
}

impl User {
    /// Create a new user record
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
