//! Custom request extractors.

pub mod user_id;
pub mod validated_json;

pub use user_id::UserIdPath;
pub use validated_json::ValidatedJson;
